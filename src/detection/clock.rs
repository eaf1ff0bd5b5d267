//! 日期来源抽象
//!
//! 路径兜底规则需要"今天"的日期。通过 `Clock` 注入时间源，
//! 生产环境读取本地时间，测试中使用固定日期保证输出确定。

use chrono::{Local, NaiveDate};

/// 提供当前日期的时间源
pub trait Clock {
    fn today(&self) -> NaiveDate;
}

/// 读取系统本地时间
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}

/// 固定日期，用于测试与可复现的批处理
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub NaiveDate);

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_clock_returns_its_date() {
        let date = NaiveDate::from_ymd_opt(2024, 1, 15).expect("valid date");
        assert_eq!(FixedClock(date).today(), date);
    }
}
