#![cfg_attr(target_arch = "avr", no_std)]
#![cfg_attr(target_arch = "avr", no_main)]

#[cfg(target_arch = "avr")]
use panic_halt as _;

#[cfg(target_arch = "avr")]
#[avr_device::entry]
fn main() -> ! {
    use avr_device::atmega328p::Peripherals;
    use embedded_hal::blocking::delay::DelayMs;
    use weather_station::config::{CYCLE_DELAY_MS, LCD_I2C_ADDR};
    use weather_station::drivers::{AlarmLed, ButtonHandler, Lcd, MotorController, SerialConsole};
    use weather_station::hal::{adc, Adc, Delay, Pins, Timer1Pwm, Twi, Uart};
    use weather_station::logger::{LogType, Logger};
    use weather_station::sensors::AdcBank;
    use weather_station::{Station, StationConfig};

    // only fails if called twice
    let dp = Peripherals::take().unwrap();
    let pins = Pins::new(dp.PORTB, dp.PORTC, dp.PORTD);
    let mut delay = Delay::new(dp.TC0);

    let mut logger = Logger::new(SerialConsole::new(Uart::new(dp.USART0)), LogType::Sensor);
    logger.log_system(0, "Weather station v0.1.0").ok();

    let mut lcd = Lcd::new(Twi::new(dp.TWI), delay, LCD_I2C_ADDR);
    if lcd.init().is_err() {
        logger.log_error(0, "lcd init failed").ok();
    }

    let sensors = AdcBank::<_, Adc, _, _, _>::new(Adc::new(dp.ADC), adc::A0, adc::A1, adc::A2);
    let button = ButtonHandler::new(pins.d2.into_pull_up_input());
    let alarm = AlarmLed::new(pins.d8.into_output());
    let motor = MotorController::new(Timer1Pwm::new(dp.TC1, pins.d9.into_output()));

    let mut station = Station::new(
        sensors,
        button,
        alarm,
        motor,
        lcd,
        delay,
        StationConfig::default(),
    );

    if let Err(err) = station.boot() {
        logger.log_station_error(0, &err).ok();
    }
    logger.log_system(0, "Ready...").ok();

    loop {
        match station.cycle() {
            Ok(report) => {
                logger.log_report(&report).ok();
            }
            Err(err) => {
                logger.log_station_error(station.cycles(), &err).ok();
                delay.delay_ms(CYCLE_DELAY_MS);
            }
        }
    }
}

#[cfg(not(target_arch = "avr"))]
fn main() {
    println!("weather_station firmware only runs on AVR; the cycle logic is exercised by `cargo test`");
}
