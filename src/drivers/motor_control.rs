//! DC motor speed control over PWM

use embedded_hal::PwmPin;

/// Drives a motor transistor from an 8-bit duty cycle.
///
/// The duty is rescaled onto whatever resolution the PWM channel has, so
/// 255 is always full on regardless of the timer's top value.
pub struct MotorController<P> {
    pwm: P,
    duty: u8,
}

impl<P> MotorController<P>
where
    P: PwmPin,
    P::Duty: Copy + Into<u32> + TryFrom<u32>,
{
    /// Enables the channel with the motor stopped.
    pub fn new(mut pwm: P) -> Self {
        if let Ok(zero) = <P::Duty as TryFrom<u32>>::try_from(0u32) {
            pwm.set_duty(zero);
        }
        pwm.enable();
        Self { pwm, duty: 0 }
    }

    pub fn set_duty(&mut self, duty: u8) {
        let max: u32 = self.pwm.get_max_duty().into();
        let scaled = duty as u32 * max / u8::MAX as u32;
        // scaled never exceeds max, so the conversion back cannot fail
        if let Ok(value) = <P::Duty as TryFrom<u32>>::try_from(scaled) {
            self.pwm.set_duty(value);
        }
        self.duty = duty;
    }

    pub fn stop(&mut self) {
        self.set_duty(0);
    }

    /// Last duty requested, 0..=255
    pub fn duty(&self) -> u8 {
        self.duty
    }

    pub fn release(mut self) -> P {
        self.pwm.disable();
        self.pwm
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Channel {
        duty: u16,
        max: u16,
        enabled: bool,
    }

    impl PwmPin for Channel {
        type Duty = u16;

        fn disable(&mut self) {
            self.enabled = false;
        }

        fn enable(&mut self) {
            self.enabled = true;
        }

        fn get_duty(&self) -> u16 {
            self.duty
        }

        fn get_max_duty(&self) -> u16 {
            self.max
        }

        fn set_duty(&mut self, duty: u16) {
            self.duty = duty;
        }
    }

    fn channel(max: u16) -> Channel {
        Channel {
            duty: 1234,
            max,
            enabled: false,
        }
    }

    #[test]
    fn starts_enabled_and_stopped() {
        let motor = MotorController::new(channel(255));
        assert_eq!(motor.duty(), 0);
        let pwm = motor.release();
        assert_eq!(pwm.duty, 0);
        assert!(!pwm.enabled);
    }

    #[test]
    fn eight_bit_channel_passes_duty_through() {
        let mut motor = MotorController::new(channel(255));
        motor.set_duty(200);
        assert!(motor.pwm.enabled);
        assert_eq!(motor.pwm.get_duty(), 200);
    }

    #[test]
    fn wider_channel_is_rescaled() {
        let mut motor = MotorController::new(channel(40000));
        motor.set_duty(255);
        assert_eq!(motor.pwm.get_duty(), 40000);
        motor.set_duty(51);
        assert_eq!(motor.pwm.get_duty(), 8000);
        motor.stop();
        assert_eq!(motor.pwm.get_duty(), 0);
        assert_eq!(motor.duty(), 0);
    }
}
