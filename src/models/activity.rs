use serde::Serialize;

/// Kind of a tracked presence event.
///
/// `Sick`, `Vacation` and `TimeOff` are whole-day markers; the other four
/// describe intra-day transitions.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub enum Activity {
    Arrive,
    Break,
    Resume,
    Leave,
    Sick,
    Vacation,
    TimeOff,
}

impl Activity {
    /// Convert enum → DB string
    pub fn to_db_str(&self) -> &'static str {
        match self {
            Activity::Arrive => "arrive",
            Activity::Break => "break",
            Activity::Resume => "resume",
            Activity::Leave => "leave",
            Activity::Sick => "sick",
            Activity::Vacation => "vacation",
            Activity::TimeOff => "timeoff",
        }
    }

    /// Convert DB string → enum
    pub fn from_db_str(s: &str) -> Option<Self> {
        match s {
            "arrive" => Some(Activity::Arrive),
            "break" => Some(Activity::Break),
            "resume" => Some(Activity::Resume),
            "leave" => Some(Activity::Leave),
            "sick" => Some(Activity::Sick),
            "vacation" => Some(Activity::Vacation),
            "timeoff" => Some(Activity::TimeOff),
            _ => None,
        }
    }

    /// True for the whole-day absence markers.
    pub fn is_absence(&self) -> bool {
        matches!(self, Activity::Sick | Activity::Vacation | Activity::TimeOff)
    }
}
