mod alert;
mod button;
mod field;
mod spinner;
mod stat_card;

pub(crate) use alert::{Alert, AlertKind, NoticeStack};
pub(crate) use button::Button;
pub(crate) use field::TextField;
pub(crate) use spinner::Spinner;
pub(crate) use stat_card::StatCard;
