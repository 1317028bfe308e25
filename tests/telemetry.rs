mod tests {
    use myrtio_light_selector::{
        ConfigError, Error,
        telemetry::{format_error, format_voltage},
    };

    #[test]
    fn test_format_voltage() {
        assert_eq!(format_voltage(4.2).as_str(), "4.20 V");
        assert_eq!(format_voltage(3.456).as_str(), "3.46 V");
    }

    #[test]
    fn test_format_voltage_overflow() {
        assert_eq!(format_voltage(1.0e20).as_str(), "-- V");
        assert_eq!(format_voltage(-3.0e30).as_str(), "-- V");
    }

    #[test]
    fn test_format_error() {
        assert_eq!(format_error(Error::Telemetry).as_str(), "ERR telemetry");
        assert_eq!(
            format_error(Error::Config(ConfigError::EmptyModes)).as_str(),
            "ERR config"
        );
    }
}
