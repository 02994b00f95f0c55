use chrono::{Timelike, Utc};
use chrono_tz::Tz;
use dialclock_proto::config::HourHandMode;

const DEGREES_PER_HOUR: u32 = 30;
const DEGREES_PER_MINUTE: u32 = 6;
const DEGREES_PER_SECOND: u32 = 6;

/// Hand angles in whole degrees, clockwise from 12 o'clock.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RotationSnapshot {
    hour:   u32,
    minute: u32,
    second: u32,
}

impl RotationSnapshot {
    /// Derive the hand angles from a time of day.
    ///
    /// Leap seconds are folded into second 59 by `chrono`, so every angle
    /// stays below a full turn.
    pub fn at<T: Timelike>(time: &T, mode: HourHandMode) -> Self {
        let minute = time.minute() * DEGREES_PER_MINUTE;
        let hour = (time.hour() % 12) * DEGREES_PER_HOUR;
        let hour = match mode {
            HourHandMode::Stepped => hour,
            HourHandMode::Sweeping => hour + time.minute() / 2,
        };

        Self {
            hour,
            minute,
            second: time.second() * DEGREES_PER_SECOND,
        }
    }

    /// Read the wall clock in `tz` and derive the hand angles.
    pub fn now(tz: Tz, mode: HourHandMode) -> Self {
        Self::at(&Utc::now().with_timezone(&tz), mode)
    }

    pub fn hour(&self) -> u32 {
        self.hour
    }

    pub fn minute(&self) -> u32 {
        self.minute
    }

    pub fn second(&self) -> u32 {
        self.second
    }

    pub fn hour_radians(&self) -> f32 {
        (self.hour as f32).to_radians()
    }

    pub fn minute_radians(&self) -> f32 {
        (self.minute as f32).to_radians()
    }

    pub fn second_radians(&self) -> f32 {
        (self.second as f32).to_radians()
    }
}

#[cfg(test)]
mod tests {
    use chrono::{NaiveTime, TimeZone};

    use super::*;

    fn time(h: u32, m: u32, s: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(h, m, s).expect("valid time")
    }

    fn angles(snapshot: RotationSnapshot) -> (u32, u32, u32) {
        (snapshot.hour(), snapshot.minute(), snapshot.second())
    }

    #[test]
    fn three_o_clock_points_right() {
        let snapshot = RotationSnapshot::at(&time(3, 0, 0), HourHandMode::Stepped);
        assert_eq!(angles(snapshot), (90, 0, 0));
    }

    #[test]
    fn afternoon_folds_onto_twelve_hour_dial() {
        let morning = RotationSnapshot::at(&time(3, 0, 0), HourHandMode::Stepped);
        let afternoon = RotationSnapshot::at(&time(15, 0, 0), HourHandMode::Stepped);
        assert_eq!(morning, afternoon);

        let noon = RotationSnapshot::at(&time(12, 0, 0), HourHandMode::Stepped);
        assert_eq!(angles(noon), (0, 0, 0));
    }

    #[test]
    fn stepped_hour_ignores_minutes() {
        let snapshot = RotationSnapshot::at(&time(0, 30, 15), HourHandMode::Stepped);
        assert_eq!(angles(snapshot), (0, 180, 90));
    }

    #[test]
    fn sweeping_hour_creeps_with_minutes() {
        let snapshot = RotationSnapshot::at(&time(0, 30, 15), HourHandMode::Sweeping);
        assert_eq!(angles(snapshot), (15, 180, 90));

        let late = RotationSnapshot::at(&time(11, 59, 59), HourHandMode::Sweeping);
        assert_eq!(angles(late), (359, 354, 354));
    }

    #[test]
    fn every_second_of_the_day_stays_on_the_grid() {
        for second_of_day in 0..86_400 {
            let t = NaiveTime::from_num_seconds_from_midnight_opt(second_of_day, 0)
                .expect("valid time");
            let snapshot = RotationSnapshot::at(&t, HourHandMode::Stepped);

            assert!(snapshot.hour() <= 330);
            assert_eq!(snapshot.hour() % 30, 0);
            assert!(snapshot.minute() <= 354);
            assert_eq!(snapshot.minute() % 6, 0);
            assert!(snapshot.second() <= 354);
            assert_eq!(snapshot.second() % 6, 0);
        }
    }

    #[test]
    fn leap_second_stays_below_full_turn() {
        let leap = NaiveTime::from_hms_milli_opt(23, 59, 59, 1_500).expect("leap second");
        let snapshot = RotationSnapshot::at(&leap, HourHandMode::Stepped);
        assert_eq!(snapshot.second(), 354);
    }

    #[test]
    fn timezone_shifts_the_hour_hand() {
        let utc = Utc
            .with_ymd_and_hms(2024, 1, 1, 0, 0, 0)
            .single()
            .expect("valid instant");
        let tehran = utc.with_timezone(&chrono_tz::Asia::Tehran);

        // UTC+03:30
        let snapshot = RotationSnapshot::at(&tehran, HourHandMode::Stepped);
        assert_eq!(angles(snapshot), (90, 180, 0));
    }

    #[test]
    fn now_reads_the_wall_clock_in_the_zone() {
        let tz = chrono_tz::Asia::Tehran;
        let before = RotationSnapshot::at(&Utc::now().with_timezone(&tz), HourHandMode::Stepped);
        let snapshot = RotationSnapshot::now(tz, HourHandMode::Stepped);
        let after = RotationSnapshot::at(&Utc::now().with_timezone(&tz), HourHandMode::Stepped);

        assert!(snapshot == before || snapshot == after);
    }

    #[test]
    fn radians_follow_degrees() {
        let snapshot = RotationSnapshot::at(&time(6, 15, 0), HourHandMode::Stepped);
        assert!((snapshot.hour_radians() - std::f32::consts::PI).abs() < 1e-6);
        assert!((snapshot.minute_radians() - std::f32::consts::FRAC_PI_2).abs() < 1e-6);
        assert_eq!(snapshot.second_radians(), 0.0);
    }
}
