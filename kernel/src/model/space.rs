use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

// 予約対象のスペース。固定の6区画で、実行中に増減しない。
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    EnumIter,
)]
#[serde(rename_all = "UPPERCASE")]
#[strum(serialize_all = "UPPERCASE")]
pub enum Space {
    Gray,
    Blue,
    Silver,
    Gold,
    Glab1,
    Glab2,
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_space_wire_names() {
        assert_eq!(Space::Gray.to_string(), "GRAY");
        assert_eq!(Space::Glab2.to_string(), "GLAB2");
        assert_eq!("SILVER".parse::<Space>().unwrap(), Space::Silver);
        assert!("ONYX".parse::<Space>().is_err());
        assert_eq!(Space::iter().count(), 6);
    }
}
