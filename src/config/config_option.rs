/// A configurable value, together with the bounds it may take.
#[derive(Clone, Debug)]
pub struct ConfigOption<T> {
    pub name: &'static str,
    pub min: T,
    pub max: T,
    pub value: T,
}

impl<T: PartialOrd> ConfigOption<T> {
    /// Sets the value of the option, if `value` is within the bounds of the option.
    ///
    /// Returns whether the value was set.
    pub fn set(&mut self, value: T) -> bool {
        match self.min <= value && value <= self.max {
            true => {
                self.value = value;
                true
            }
            false => false,
        }
    }
}

#[cfg(test)]
mod config_option_tests {
    use super::*;

    #[test]
    fn set_within_bounds() {
        let mut option = ConfigOption {
            name: "test",
            min: 1,
            max: 10,
            value: 5,
        };

        assert!(option.set(10));
        assert_eq!(option.value, 10);

        assert!(!option.set(11));
        assert!(!option.set(0));
        assert_eq!(option.value, 10);
    }
}
