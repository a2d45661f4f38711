use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use shared::error::AppError;
use std::fmt;
use std::str::FromStr;

// 営業時間は 09:00〜21:00。1コマ1時間で、1日あたり12コマ。
pub const OPENING_HOUR: u32 = 9;
pub const CLOSING_HOUR: u32 = 21;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TimeSlot {
    start_hour: u32,
}

impl TimeSlot {
    pub fn new(start_hour: u32) -> Result<Self, AppError> {
        if !(OPENING_HOUR..CLOSING_HOUR).contains(&start_hour) {
            return Err(AppError::ConversionEntityError(format!(
                "営業時間外の時間帯です: {start_hour}時"
            )));
        }
        Ok(Self { start_hour })
    }

    pub fn start_hour(&self) -> u32 {
        self.start_hour
    }

    pub fn end_hour(&self) -> u32 {
        self.start_hour + 1
    }

    // 当日の全コマを開始時刻の昇順で返す
    pub fn all() -> impl Iterator<Item = TimeSlot> {
        (OPENING_HOUR..CLOSING_HOUR).map(|start_hour| TimeSlot { start_hour })
    }
}

impl fmt::Display for TimeSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:00-{:02}:00", self.start_hour, self.end_hour())
    }
}

impl FromStr for TimeSlot {
    type Err = AppError;

    // "09:00-10:00" の形式のみ受け付ける
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || AppError::ConversionEntityError(format!("時間帯の形式が不正です: {s}"));
        let (start, end) = s.split_once('-').ok_or_else(invalid)?;
        let parse_hour = |part: &str| -> Result<u32, AppError> {
            let (hour, minutes) = part.split_once(':').ok_or_else(invalid)?;
            if minutes != "00" {
                return Err(invalid());
            }
            hour.parse().map_err(|_| invalid())
        };
        let start_hour = parse_hour(start)?;
        let end_hour = parse_hour(end)?;
        let slot = TimeSlot::new(start_hour)?;
        if slot.end_hour() != end_hour {
            return Err(invalid());
        }
        Ok(slot)
    }
}

impl Serialize for TimeSlot {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for TimeSlot {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_and_parse() {
        let slot = TimeSlot::new(9).unwrap();
        assert_eq!(slot.to_string(), "09:00-10:00");
        assert_eq!("09:00-10:00".parse::<TimeSlot>().unwrap(), slot);
        assert_eq!(
            "20:00-21:00".parse::<TimeSlot>().unwrap(),
            TimeSlot::new(20).unwrap()
        );
    }

    #[test]
    fn test_rejects_out_of_hours_and_malformed() {
        assert!(TimeSlot::new(21).is_err());
        assert!(TimeSlot::new(8).is_err());
        assert!("21:00-22:00".parse::<TimeSlot>().is_err());
        // 1時間単位でないコマは存在しない
        assert!("09:00-11:00".parse::<TimeSlot>().is_err());
        assert!("09:30-10:30".parse::<TimeSlot>().is_err());
        assert!("0900-1000".parse::<TimeSlot>().is_err());
    }

    #[test]
    fn test_all_slots() {
        let slots: Vec<TimeSlot> = TimeSlot::all().collect();
        assert_eq!(slots.len(), 12);
        assert_eq!(slots.first().unwrap().to_string(), "09:00-10:00");
        assert_eq!(slots.last().unwrap().to_string(), "20:00-21:00");
        assert!(slots.windows(2).all(|pair| pair[0] < pair[1]));
    }
}
