pub mod alarm_led;
pub mod button_handler;
pub mod lcd;
pub mod motor_control;
pub mod serial_console;

pub use alarm_led::AlarmLed;
pub use button_handler::ButtonHandler;
pub use lcd::Lcd;
pub use motor_control::MotorController;
pub use serial_console::SerialConsole;
