use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};
use types::OrderRecord;

use crate::{query, FetchError, InvalidOrderId, UnknownPanel};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub enum Phase {
    #[default]
    Idle,
    Searching,
    Displaying,
    /// The last search failed. No record is held.
    NotFound,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Panel {
    Overview,
    Source,
    Destination,
    Additional,
}

impl Panel {
    pub const ALL: [Panel; 4] = [
        Panel::Overview,
        Panel::Source,
        Panel::Destination,
        Panel::Additional,
    ];
}

impl FromStr for Panel {
    type Err = UnknownPanel;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "overview" | "order" => Ok(Panel::Overview),
            "source" | "src" => Ok(Panel::Source),
            "destination" | "dest" | "dst" => Ok(Panel::Destination),
            "additional" | "metadata" | "meta" => Ok(Panel::Additional),
            _ => Err(UnknownPanel(s.to_string())),
        }
    }
}

/// Which detail panels are expanded.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Panels {
    pub overview: bool,
    pub source: bool,
    pub destination: bool,
    pub additional: bool,
}

impl Panels {
    pub fn all() -> Self {
        Self {
            overview: true,
            source: true,
            destination: true,
            additional: true,
        }
    }

    pub fn is_expanded(&self, panel: Panel) -> bool {
        match panel {
            Panel::Overview => self.overview,
            Panel::Source => self.source,
            Panel::Destination => self.destination,
            Panel::Additional => self.additional,
        }
    }

    /// Flips `panel` and returns its new state.
    pub fn toggle(&mut self, panel: Panel) -> bool {
        let slot = match panel {
            Panel::Overview => &mut self.overview,
            Panel::Source => &mut self.source,
            Panel::Destination => &mut self.destination,
            Panel::Additional => &mut self.additional,
        };
        *slot = !*slot;
        *slot
    }
}

/// Everything the presentation layer needs to draw the explorer.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ViewState {
    pub query: String,
    pub phase: Phase,
    /// A request is in flight. Cleared by the first response to resolve.
    pub searching: bool,
    pub record: Option<OrderRecord>,
    pub expanded: Panels,
}

impl ViewState {
    /// Whether the search control is enabled.
    pub fn can_submit(&self) -> bool {
        query::is_valid_identifier(&self.query) && !self.searching
    }
}

/// Sequence number of an issued search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct SearchTicket(u64);

impl SearchTicket {
    pub fn sequence(self) -> u64 {
        self.0
    }
}

/// How responses of overlapping searches are applied.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ResponsePolicy {
    /// Every response is applied in arrival order, so the one that resolves
    /// last is displayed even if a newer search was issued after it.
    #[default]
    LastResolvedWins,
    /// Only the response of the most recently issued search is applied.
    LatestIssued,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Completion {
    Applied(Phase),
    /// The response belonged to a superseded search.
    Discarded,
}

/// Search state machine.
///
/// ```text
/// Idle --submit--> Searching --ok--> Displaying --submit--> Searching
///                            --err--> NotFound
/// any --reset--> Idle
/// ```
#[derive(Debug, Default)]
pub struct Session {
    view: ViewState,
    policy: ResponsePolicy,
    issued: u64,
}

impl Session {
    pub fn new(policy: ResponsePolicy) -> Self {
        Self {
            policy,
            ..Default::default()
        }
    }

    pub fn view(&self) -> &ViewState {
        &self.view
    }

    pub fn set_query(&mut self, query: impl Into<String>) {
        self.view.query = query.into();
    }

    /// Starts a search for `query`, dropping the record currently shown.
    pub fn begin_search(&mut self, query: &str) -> Result<SearchTicket, InvalidOrderId> {
        query::check(query)?;

        self.issued += 1;
        self.view.query = query.to_string();
        self.view.record = None;
        self.view.phase = Phase::Searching;
        self.view.searching = true;

        debug!(sequence = self.issued, "Search issued");
        Ok(SearchTicket(self.issued))
    }

    pub fn complete(
        &mut self,
        ticket: SearchTicket,
        outcome: Result<OrderRecord, FetchError>,
    ) -> Completion {
        if self.policy == ResponsePolicy::LatestIssued && ticket.0 != self.issued {
            debug!(
                sequence = ticket.0,
                latest = self.issued,
                "Discarding response of superseded search"
            );
            return Completion::Discarded;
        }

        self.view.searching = false;
        match outcome {
            Ok(record) => {
                info!(
                    "Displaying order {}",
                    record.create_id().unwrap_or("<missing id>")
                );
                self.view.record = Some(record);
                self.view.phase = Phase::Displaying;
            }
            Err(_) => {
                self.view.record = None;
                self.view.phase = Phase::NotFound;
            }
        }

        Completion::Applied(self.view.phase)
    }

    /// Escape / new search. Every ticket issued so far is superseded, so
    /// under [`ResponsePolicy::LatestIssued`] a search still in flight can no
    /// longer put a record on screen.
    pub fn reset(&mut self) {
        self.issued += 1;
        self.view = ViewState::default();
    }

    pub fn toggle(&mut self, panel: Panel) -> bool {
        self.view.expanded.toggle(panel)
    }
}

#[cfg(test)]
mod tests {
    use reqwest::StatusCode;
    use serde_json::json;

    use super::*;

    fn id(c: char) -> String {
        c.to_string().repeat(64)
    }

    fn record(create_id: &str) -> OrderRecord {
        OrderRecord::from_json(json!({
            "result": { "create_order": { "create_id": create_id } }
        }))
    }

    fn failure() -> FetchError {
        FetchError::status(StatusCode::NOT_FOUND)
    }

    #[test]
    fn starts_idle() {
        let session = Session::default();
        assert_eq!(session.view().phase, Phase::Idle);
        assert!(session.view().record.is_none());
        assert!(!session.view().can_submit());
    }

    #[test]
    fn invalid_query_is_rejected_without_state_change() {
        let mut session = Session::default();
        assert_eq!(session.begin_search("abc"), Err(InvalidOrderId { len: 3 }));
        assert_eq!(session.view().phase, Phase::Idle);
        assert!(!session.view().searching);
    }

    #[test]
    fn successful_search_displays_the_record() {
        let mut session = Session::default();
        let ticket = session.begin_search(&id('a')).unwrap();
        assert_eq!(session.view().phase, Phase::Searching);
        assert!(session.view().searching);
        assert!(!session.view().can_submit());

        let completion = session.complete(ticket, Ok(record(&id('a'))));
        assert_eq!(completion, Completion::Applied(Phase::Displaying));
        assert_eq!(
            session.view().record.as_ref().and_then(|r| r.create_id()),
            Some(id('a').as_str())
        );
        assert!(session.view().can_submit());
    }

    #[test]
    fn failure_clears_the_previous_record() {
        let mut session = Session::default();
        let first = session.begin_search(&id('a')).unwrap();
        session.complete(first, Ok(record(&id('a'))));

        let second = session.begin_search(&id('b')).unwrap();
        assert!(session.view().record.is_none());

        let completion = session.complete(second, Err(failure()));
        assert_eq!(completion, Completion::Applied(Phase::NotFound));
        assert!(session.view().record.is_none());
        assert!(!session.view().searching);
        assert_eq!(session.view().query, id('b'));
    }

    #[test]
    fn tickets_increase() {
        let mut session = Session::default();
        let first = session.begin_search(&id('a')).unwrap();
        let second = session.begin_search(&id('b')).unwrap();
        assert!(second > first);
        assert_eq!(second.sequence(), first.sequence() + 1);
    }

    #[test]
    fn last_resolved_response_wins_by_default() {
        let mut session = Session::default();
        let first = session.begin_search(&id('a')).unwrap();
        let second = session.begin_search(&id('b')).unwrap();

        session.complete(second, Ok(record(&id('b'))));
        let late = session.complete(first, Ok(record(&id('a'))));

        assert_eq!(late, Completion::Applied(Phase::Displaying));
        assert_eq!(
            session.view().record.as_ref().and_then(|r| r.create_id()),
            Some(id('a').as_str())
        );
    }

    #[test]
    fn latest_issued_discards_superseded_responses() {
        let mut session = Session::new(ResponsePolicy::LatestIssued);
        let first = session.begin_search(&id('a')).unwrap();
        let second = session.begin_search(&id('b')).unwrap();

        session.complete(second, Ok(record(&id('b'))));
        assert_eq!(
            session.complete(first, Ok(record(&id('a')))),
            Completion::Discarded
        );
        assert_eq!(
            session.view().record.as_ref().and_then(|r| r.create_id()),
            Some(id('b').as_str())
        );
    }

    #[test]
    fn reset_returns_to_idle() {
        let mut session = Session::new(ResponsePolicy::LatestIssued);
        let ticket = session.begin_search(&id('a')).unwrap();
        session.complete(ticket, Ok(record(&id('a'))));
        session.toggle(Panel::Source);

        let pending = session.begin_search(&id('b')).unwrap();
        session.reset();
        assert_eq!(session.view().phase, Phase::Idle);
        assert!(session.view().query.is_empty());
        assert!(session.view().record.is_none());
        assert_eq!(session.view().expanded, Panels::default());

        assert_eq!(
            session.complete(pending, Ok(record(&id('b')))),
            Completion::Discarded
        );
        assert_eq!(session.view().phase, Phase::Idle);
        assert!(session.view().record.is_none());
        assert!(session.view().query.is_empty());
    }

    #[test]
    fn reset_does_not_cancel_under_last_resolved_wins() {
        let mut session = Session::default();
        let pending = session.begin_search(&id('a')).unwrap();
        session.reset();

        assert_eq!(
            session.complete(pending, Ok(record(&id('a')))),
            Completion::Applied(Phase::Displaying)
        );
        assert!(session.view().record.is_some());
    }

    #[test]
    fn search_after_reset_is_applied() {
        let mut session = Session::new(ResponsePolicy::LatestIssued);
        session.begin_search(&id('a')).unwrap();
        session.reset();

        let ticket = session.begin_search(&id('b')).unwrap();
        assert_eq!(
            session.complete(ticket, Ok(record(&id('b')))),
            Completion::Applied(Phase::Displaying)
        );
    }

    #[test]
    fn panels_toggle_independently() {
        let mut session = Session::default();
        assert!(session.toggle(Panel::Additional));
        assert!(session.view().expanded.is_expanded(Panel::Additional));
        assert!(!session.view().expanded.is_expanded(Panel::Overview));
        assert!(!session.toggle(Panel::Additional));
        assert_eq!(session.view().expanded, Panels::default());
    }

    #[test]
    fn panels_parse_from_names() {
        assert_eq!("overview".parse::<Panel>(), Ok(Panel::Overview));
        assert_eq!("DEST".parse::<Panel>(), Ok(Panel::Destination));
        assert_eq!(" meta ".parse::<Panel>(), Ok(Panel::Additional));
        assert!("swap".parse::<Panel>().is_err());
    }

    #[test]
    fn view_state_serializes() {
        let mut session = Session::default();
        session.set_query("abc");
        let value = serde_json::to_value(session.view()).unwrap();
        assert_eq!(value["query"], "abc");
        assert_eq!(value["phase"], "Idle");
        assert_eq!(value["record"], serde_json::Value::Null);
        assert_eq!(value["expanded"]["overview"], false);
    }
}
