pub(crate) const MINUTES_IN_DEGREE: u8 = 60;
pub(crate) const SECONDS_IN_MINUTE: u8 = 60;

pub(crate) const HALF_TURN_DEG: u16 = 180;
pub(crate) const QUARTER_TURN_DEG: u16 = HALF_TURN_DEG >> 1;
