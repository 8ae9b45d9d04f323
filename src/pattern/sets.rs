//! The pattern collections flashed onto the display firmware.

use super::shapes::*;
use super::Pattern;

/// One of each shape at full size.
pub fn basic_patterns() -> Vec<Pattern> {
    vec![
        Pattern::new("Square Wave", square(64, 0x8000, 0.5)),
        Pattern::new("Triangle Wave", triangle(64, 0x8000)),
        Pattern::new("Sawtooth Wave", sawtooth(64, 0x8000)),
        Pattern::new("Sine Wave", sine(64, 0x4000, 2)),
        Pattern::new("Staircase", staircase(64, 8, 0x8000)),
        Pattern::new("Heart Shape", heart(64, 0x8000)),
        Pattern::new("House Pattern", house(64, 0x8000)),
    ]
}

/// A sequence telling a little story when played one after another:
/// building a house, adding a heart, and celebrating.
pub fn story_patterns() -> Vec<Pattern> {
    vec![
        Pattern::new("Foundation", staircase(64, 4, 0x3000)),
        Pattern::new("Building_Walls", triangle(64, 0x6000)),
        Pattern::new("Adding_Roof", house(64, 0x8000)),
        Pattern::new("Adding_Love", heart(64, 0x7000)),
        Pattern::new("Happy_Ending", sine(64, 0x4000, 1)),
        Pattern::new("Celebration", square(64, 0x8000, 0.3)),
    ]
}

/// Patterns for checking the trigger, time base and voltage scale of the oscilloscope.
pub fn test_patterns() -> Vec<Pattern> {
    vec![
        Pattern::new("Calibration_Square", square(32, 0x8000, 0.5)),
        Pattern::new("Frequency_Test", sine(64, 0x4000, 4)),
        Pattern::new("Amplitude_Steps", staircase(48, 6, 0x8000)),
        Pattern::new("Trigger_Test", trigger(4, 16, 0x8000)),
        Pattern::new("Noise_Pattern", ripple(64)),
    ]
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn set_sizes() {
        let basic = basic_patterns();
        assert_eq!(basic.len(), 7);
        assert!(basic.iter().all(|p| p.samples.len() == 64));

        let story = story_patterns();
        let names: Vec<&str> = story.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(
            names,
            vec![
                "Foundation",
                "Building_Walls",
                "Adding_Roof",
                "Adding_Love",
                "Happy_Ending",
                "Celebration"
            ]
        );

        let lengths: Vec<usize> = test_patterns().iter().map(|p| p.samples.len()).collect();
        assert_eq!(lengths, vec![32, 64, 48, 64, 64]);
    }

    #[test]
    fn foundation_steps() {
        let foundation = &story_patterns()[0];
        let stats = foundation.stats().unwrap();
        assert_eq!(stats.min, 0);
        assert_eq!(stats.max, 0x3000);
        // 1/3 * 0x3000
        assert_eq!(foundation.samples[16], 0x1000);
    }
}
