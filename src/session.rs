use crate::day::Day;
use crate::errors::{SessionError, ValidationError};
use crate::ledger::{DayEntry, TravelLedger, WeeklySummary};
use crate::profile::Profile;
use chrono::{DateTime, Utc};

/// What the summary panel currently shows.
#[derive(Debug, Clone, PartialEq)]
pub enum SummaryView<'a> {
    NotRequested,
    Ready(&'a WeeklySummary),
}

/// All state belonging to one visit of the page.
#[derive(Debug, Clone)]
pub struct Session {
    started_at: DateTime<Utc>,
    profile: Option<Profile>,
    ledger: TravelLedger,
    summary: Option<WeeklySummary>,
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

impl Session {
    pub fn new() -> Self {
        Self {
            started_at: Utc::now(),
            profile: None,
            ledger: TravelLedger::new(),
            summary: None,
        }
    }

    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    pub fn profile(&self) -> Option<&Profile> {
        self.profile.as_ref()
    }

    pub fn ledger(&self) -> &TravelLedger {
        &self.ledger
    }

    pub fn set_profile(&mut self, profile: Profile) -> Result<&Profile, SessionError> {
        if self.profile.is_some() {
            return Err(SessionError::ProfileLocked);
        }
        Ok(self.profile.insert(profile))
    }

    /// Records one day's input. Any edit hides the previously shown summary.
    pub fn record(
        &mut self,
        day: Day,
        traveled: bool,
        destination: &str,
        distance_km: f64,
    ) -> Result<&DayEntry, ValidationError> {
        self.summary = None;
        self.ledger.record_entry(day, traveled, destination, distance_km)
    }

    pub fn request_summary(&mut self) -> Result<&WeeklySummary, SessionError> {
        if self.profile.is_none() {
            return Err(SessionError::ProfileIncomplete);
        }
        Ok(self.summary.insert(self.ledger.summarize()))
    }

    pub fn summary_view(&self) -> SummaryView<'_> {
        match &self.summary {
            Some(summary) => SummaryView::Ready(summary),
            None => SummaryView::NotRequested,
        }
    }

    pub fn reset(&mut self) {
        self.started_at = Utc::now();
        self.profile = None;
        self.ledger.clear();
        self.summary = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn profile() -> Profile {
        Profile::new("Alex", 25, "Shine125", "Mumbai").unwrap()
    }

    #[test]
    fn profile_can_only_be_set_once() {
        let mut session = Session::new();
        session.set_profile(profile()).unwrap();
        let other = Profile::new("Sam", 30, "Pulsar 150", "Delhi").unwrap();
        assert_eq!(session.set_profile(other), Err(SessionError::ProfileLocked));
        assert_eq!(session.profile().map(Profile::name), Some("Alex"));
    }

    #[test]
    fn summary_requires_profile() {
        let mut session = Session::new();
        session.record(Day::Monday, true, "Office", 10.0).unwrap();
        assert_eq!(
            session.request_summary(),
            Err(SessionError::ProfileIncomplete)
        );
        assert_eq!(session.summary_view(), SummaryView::NotRequested);
    }

    #[test]
    fn empty_summary_differs_from_not_requested() {
        let mut session = Session::new();
        session.set_profile(profile()).unwrap();
        assert_eq!(session.summary_view(), SummaryView::NotRequested);

        session.request_summary().unwrap();
        match session.summary_view() {
            SummaryView::Ready(summary) => assert!(summary.is_empty()),
            SummaryView::NotRequested => panic!("summary was requested"),
        }
    }

    #[test]
    fn editing_hides_requested_summary() {
        let mut session = Session::new();
        session.set_profile(profile()).unwrap();
        session.record(Day::Monday, true, "Office", 10.0).unwrap();
        assert_eq!(session.request_summary().unwrap().total_km, 10.0);

        assert!(session.record(Day::Tuesday, true, "", 3.0).is_err());
        assert_eq!(session.summary_view(), SummaryView::NotRequested);
        assert_eq!(session.request_summary().unwrap().total_km, 10.0);
    }

    #[test]
    fn reset_discards_everything() {
        let mut session = Session::new();
        session.set_profile(profile()).unwrap();
        session.record(Day::Monday, true, "Office", 10.0).unwrap();
        session.request_summary().unwrap();

        session.reset();
        assert!(session.profile().is_none());
        assert_eq!(session.ledger().entries().count(), 0);
        assert_eq!(session.summary_view(), SummaryView::NotRequested);
    }
}
