//! Diagnostic log over the serial console
//!
//! Lines look like `[SNS] 42 T=23.4 H=40 M=68 D=175`, where the number is the
//! cycle index. Output is write-only; nothing is ever read back.

use ufmt::{uWrite, uwrite};

use crate::application::CycleReport;
use crate::error::{SensorError, StationError};
use crate::render::write_one_decimal;
use crate::sensors::Snapshot;

/// Log categories, ordered from least to most verbose
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogType {
    Error = 0,
    System = 1,
    Sensor = 2,
    Debug = 3,
}

impl LogType {
    const fn tag(self) -> &'static str {
        match self {
            LogType::Error => "[ERR] ",
            LogType::System => "[SYS] ",
            LogType::Sensor => "[SNS] ",
            LogType::Debug => "[DBG] ",
        }
    }
}

pub struct Logger<W> {
    out: W,
    level: LogType,
    last_alarm: bool,
}

impl<W: uWrite> Logger<W> {
    /// Everything up to and including `level` is written.
    pub fn new(out: W, level: LogType) -> Self {
        Self {
            out,
            level,
            last_alarm: false,
        }
    }

    pub fn enabled(&self, log_type: LogType) -> bool {
        log_type <= self.level
    }

    pub fn log_system(&mut self, cycle: u32, msg: &str) -> Result<(), W::Error> {
        self.log_entry(LogType::System, cycle, msg)
    }

    pub fn log_debug(&mut self, cycle: u32, msg: &str) -> Result<(), W::Error> {
        self.log_entry(LogType::Debug, cycle, msg)
    }

    pub fn log_error(&mut self, cycle: u32, msg: &str) -> Result<(), W::Error> {
        self.log_entry(LogType::Error, cycle, msg)
    }

    pub fn log_sensor_error(&mut self, cycle: u32, err: &SensorError) -> Result<(), W::Error> {
        if !self.enabled(LogType::Error) {
            return Ok(());
        }
        self.header(LogType::Error, cycle)?;
        uwrite!(&mut self.out, "sensor unavailable: {}\r\n", err.channel().as_str())
    }

    pub fn log_station_error<E>(&mut self, cycle: u32, err: &StationError<E>) -> Result<(), W::Error> {
        let msg = match err {
            StationError::Pin => "pin access failed",
            StationError::Display(_) => "display write failed",
        };
        self.log_error(cycle, msg)
    }

    pub fn log_sensor(&mut self, cycle: u32, snapshot: &Snapshot) -> Result<(), W::Error> {
        if !self.enabled(LogType::Sensor) {
            return Ok(());
        }
        self.header(LogType::Sensor, cycle)?;

        self.out.write_str("T=")?;
        match snapshot.climate.temperature {
            Ok(celsius) => write_one_decimal(&mut self.out, celsius)?,
            Err(_) => self.out.write_str("--")?,
        }
        self.out.write_str(" H=")?;
        match snapshot.climate.humidity {
            Ok(percent) => uwrite!(&mut self.out, "{}", percent)?,
            Err(_) => self.out.write_str("--")?,
        }
        match snapshot.actuator {
            Ok(reading) => uwrite!(
                &mut self.out,
                " M={} D={} R={}",
                reading.magnetic_percent,
                reading.duty,
                reading.raw.get()
            )?,
            Err(_) => self.out.write_str(" M=-- D=--")?,
        }
        self.out.write_str("\r\n")
    }

    /// Mode changes, alarm transitions, the sensor line and any unavailable
    /// channels of one cycle.
    pub fn log_report(&mut self, report: &CycleReport) -> Result<(), W::Error> {
        if report.mode_changed && self.enabled(LogType::System) {
            self.header(LogType::System, report.cycle)?;
            uwrite!(&mut self.out, "mode -> {}\r\n", report.mode.label())?;
        }

        if report.alarm != self.last_alarm {
            self.last_alarm = report.alarm;
            let msg = if report.alarm { "alarm on" } else { "alarm off" };
            self.log_system(report.cycle, msg)?;
        }

        self.log_sensor(report.cycle, &report.snapshot)?;

        let snapshot = &report.snapshot;
        if let Err(err) = snapshot.climate.temperature {
            self.log_sensor_error(report.cycle, &err)?;
        }
        if let Err(err) = snapshot.climate.humidity {
            self.log_sensor_error(report.cycle, &err)?;
        }
        if let Err(err) = snapshot.actuator {
            self.log_sensor_error(report.cycle, &err)?;
        }
        Ok(())
    }

    pub fn release(self) -> W {
        self.out
    }

    fn log_entry(&mut self, log_type: LogType, cycle: u32, msg: &str) -> Result<(), W::Error> {
        if !self.enabled(log_type) {
            return Ok(());
        }
        self.header(log_type, cycle)?;
        self.out.write_str(msg)?;
        self.out.write_str("\r\n")
    }

    fn header(&mut self, log_type: LogType, cycle: u32) -> Result<(), W::Error> {
        self.out.write_str(log_type.tag())?;
        uwrite!(&mut self.out, "{} ", cycle)
    }
}
