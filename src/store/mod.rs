//! In-memory application state and the only mutation paths into it.
//!
//! Every mutation publishes a [`StoreEvent`]; views subscribe instead of
//! polling. Feedback changes also bump a revision counter that drives the
//! background summarizer.

mod events;
mod ids;
mod snapshot;
pub mod summarizer;

use chrono::Utc;
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};
use tokio::sync::{Mutex, broadcast, watch};

use crate::assistant::{AiOutcome, Assistant, ChatContext};
use crate::models::{
    ChatEntry, FeedbackDraft, GuestMeal, MaintenanceCategory, MaintenanceDraft,
    MaintenanceRequest, MealType, MessFeedback, Rating, RequestStatus, RoomOccupancy, Section,
    seed,
};

pub use events::StoreEvent;
pub use snapshot::StoreSnapshot;
pub use summarizer::spawn_summarizer;

pub const INITIAL_SUMMARY: &str = "Analyzing recent feedback...";
pub const DEMO_STUDENT: &str = "Demo User";
pub const DEMO_HOSTEL: &str = "Mega Hostel";
pub const DEFAULT_ROOM: &str = "A-101";

const EVENT_CAPACITY: usize = 64;

#[derive(Debug)]
struct State {
    active_section: Section,
    maintenance_requests: Vec<MaintenanceRequest>,
    mess_feedbacks: Vec<MessFeedback>,
    guest_meals: Vec<GuestMeal>,
    room_occupancy: Vec<RoomOccupancy>,
    show_maintenance_form: bool,
    maintenance_draft: MaintenanceDraft,
    feedback_draft: FeedbackDraft,
    transcript: Vec<ChatEntry>,
    is_typing: bool,
    summary: String,
    summarized_revision: Option<u64>,
}

impl State {
    fn chat_context(&self) -> ChatContext {
        ChatContext {
            maintenance_requests: self.maintenance_requests.clone(),
            mess_feedbacks: self.mess_feedbacks.clone(),
            guest_meals: self.guest_meals.clone(),
        }
    }
}

struct Inner {
    state: RwLock<State>,
    assistant: Assistant,
    events: broadcast::Sender<StoreEvent>,
    feedback_revision: watch::Sender<u64>,
    chat_turn: Mutex<()>,
}

/// One completed chat round: the user's line and the assistant's reply.
#[derive(Debug, Clone)]
pub struct ChatExchange {
    pub user: ChatEntry,
    pub reply: ChatEntry,
    pub outcome: AiOutcome,
}

/// Shared handle to the dashboard state. Clones point at the same store.
#[derive(Clone)]
pub struct Store {
    inner: Arc<Inner>,
}

impl Store {
    /// Empty collections.
    pub fn new(assistant: Assistant) -> Self {
        Self::with_collections(assistant, Vec::new(), Vec::new(), Vec::new())
    }

    /// The demo data the dashboard ships with.
    pub fn seeded(assistant: Assistant) -> Self {
        let now = Utc::now();
        Self::with_collections(
            assistant,
            seed::maintenance_requests(now),
            seed::mess_feedbacks(now),
            seed::guest_meals(),
        )
    }

    pub fn with_collections(
        assistant: Assistant,
        maintenance_requests: Vec<MaintenanceRequest>,
        mess_feedbacks: Vec<MessFeedback>,
        guest_meals: Vec<GuestMeal>,
    ) -> Self {
        let (events, _) = broadcast::channel(EVENT_CAPACITY);
        let (feedback_revision, _) = watch::channel(0);
        let state = State {
            active_section: Section::default(),
            maintenance_requests,
            mess_feedbacks,
            guest_meals,
            room_occupancy: Vec::new(),
            show_maintenance_form: false,
            maintenance_draft: MaintenanceDraft::default(),
            feedback_draft: FeedbackDraft::default(),
            transcript: Vec::new(),
            is_typing: false,
            summary: INITIAL_SUMMARY.to_string(),
            summarized_revision: None,
        };
        Self {
            inner: Arc::new(Inner {
                state: RwLock::new(state),
                assistant,
                events,
                feedback_revision,
                chat_turn: Mutex::new(()),
            }),
        }
    }

    fn read(&self) -> RwLockReadGuard<'_, State> {
        self.inner.state.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, State> {
        self.inner.state.write().unwrap_or_else(PoisonError::into_inner)
    }

    fn publish(&self, event: StoreEvent) {
        log::trace!("store event: {event:?}");
        // No subscribers is fine.
        let _ = self.inner.events.send(event);
    }

    pub fn subscribe(&self) -> broadcast::Receiver<StoreEvent> {
        self.inner.events.subscribe()
    }

    pub(crate) fn watch_feedback(&self) -> watch::Receiver<u64> {
        self.inner.feedback_revision.subscribe()
    }

    // ---------- Reads ----------

    pub fn snapshot(&self) -> StoreSnapshot {
        let s = self.read();
        StoreSnapshot {
            active_section: s.active_section,
            maintenance_requests: s.maintenance_requests.clone(),
            mess_feedbacks: s.mess_feedbacks.clone(),
            guest_meals: s.guest_meals.clone(),
            room_occupancy: s.room_occupancy.clone(),
            show_maintenance_form: s.show_maintenance_form,
            maintenance_draft: s.maintenance_draft.clone(),
            feedback_draft: s.feedback_draft.clone(),
            transcript: s.transcript.clone(),
            is_typing: s.is_typing,
            summary: s.summary.clone(),
        }
    }

    pub fn chat_context(&self) -> ChatContext {
        self.read().chat_context()
    }

    pub fn maintenance_requests(&self) -> Vec<MaintenanceRequest> {
        self.read().maintenance_requests.clone()
    }

    pub fn mess_feedbacks(&self) -> Vec<MessFeedback> {
        self.read().mess_feedbacks.clone()
    }

    pub fn transcript(&self) -> Vec<ChatEntry> {
        self.read().transcript.clone()
    }

    pub fn is_typing(&self) -> bool {
        self.read().is_typing
    }

    pub fn summary(&self) -> String {
        self.read().summary.clone()
    }

    pub fn active_section(&self) -> Section {
        self.read().active_section
    }

    pub fn feedback_revision(&self) -> u64 {
        *self.inner.feedback_revision.borrow()
    }

    // ---------- UI state ----------

    pub fn set_active_section(&self, section: Section) {
        let changed = Self::switch_section(&mut self.write(), section);
        if changed {
            self.publish(StoreEvent::SectionChanged { section });
        }
    }

    fn switch_section(s: &mut State, section: Section) -> bool {
        let changed = s.active_section != section;
        s.active_section = section;
        changed
    }

    /// Shows the "Raise Issue" form, which lives in the maintenance section.
    pub fn open_maintenance_form(&self) {
        let changed = {
            let mut s = self.write();
            s.show_maintenance_form = true;
            Self::switch_section(&mut s, Section::Maintenance)
        };
        if changed {
            self.publish(StoreEvent::SectionChanged {
                section: Section::Maintenance,
            });
        }
        self.publish(StoreEvent::DraftChanged);
    }

    /// Hides the form and forgets whatever was typed into it.
    pub fn close_maintenance_form(&self) {
        {
            let mut s = self.write();
            s.show_maintenance_form = false;
            s.maintenance_draft = MaintenanceDraft::default();
        }
        self.publish(StoreEvent::DraftChanged);
    }

    /// Keeps the form open with the given values.
    pub fn update_maintenance_draft(&self, draft: MaintenanceDraft) {
        {
            let mut s = self.write();
            s.show_maintenance_form = true;
            s.maintenance_draft = draft;
        }
        self.publish(StoreEvent::DraftChanged);
    }

    pub fn update_feedback_draft(&self, draft: FeedbackDraft) {
        self.write().feedback_draft = draft;
        self.publish(StoreEvent::DraftChanged);
    }

    // ---------- Entity mutations ----------

    /// Files a new Pending ticket at the head of the list. An empty room
    /// falls back to the demo room; an empty description is kept as-is.
    pub fn add_maintenance_request(
        &self,
        category: MaintenanceCategory,
        description: &str,
        room: &str,
    ) -> MaintenanceRequest {
        let request = {
            let mut s = self.write();
            let id = ids::ticket_id(|id| s.maintenance_requests.iter().any(|r| r.id == id));
            let room = room.trim();
            let request = MaintenanceRequest {
                id,
                student_name: DEMO_STUDENT.to_string(),
                room_number: if room.is_empty() { DEFAULT_ROOM } else { room }.to_string(),
                hostel: DEMO_HOSTEL.to_string(),
                category,
                description: description.to_string(),
                status: RequestStatus::Pending,
                timestamp: Utc::now(),
            };
            s.maintenance_requests.insert(0, request.clone());
            s.show_maintenance_form = false;
            s.maintenance_draft = MaintenanceDraft::default();
            request
        };
        log::info!(
            "Maintenance request {} raised ({}, room {})",
            request.id,
            request.category,
            request.room_number
        );
        self.publish(StoreEvent::MaintenanceAdded {
            id: request.id.clone(),
        });
        request
    }

    /// Records feedback at the head of the list and schedules a new summary.
    pub fn add_mess_feedback(&self, meal_type: MealType, rating: Rating, comment: &str) -> MessFeedback {
        let feedback = {
            let mut s = self.write();
            let now = Utc::now();
            let id = ids::timestamp_id(now, |id| s.mess_feedbacks.iter().any(|f| f.id == id));
            let feedback = MessFeedback {
                id,
                meal_type,
                rating,
                comment: comment.to_string(),
                timestamp: now,
            };
            s.mess_feedbacks.insert(0, feedback.clone());
            s.feedback_draft = FeedbackDraft::default();
            // Bumped under the state lock so revision and collection stay in step.
            self.inner.feedback_revision.send_modify(|rev| *rev += 1);
            feedback
        };
        log::info!(
            "Mess feedback {} recorded ({}, {} stars)",
            feedback.id,
            feedback.meal_type,
            feedback.rating
        );
        self.publish(StoreEvent::FeedbackAdded {
            id: feedback.id.clone(),
        });
        feedback
    }

    // ---------- Assistant ----------

    /// Sends one chat message. Blank input is ignored and returns `None`.
    ///
    /// Sends are handled one at a time in arrival order, so every user line
    /// is directly followed by its own reply.
    pub async fn send_chat_message(&self, text: &str) -> Option<ChatExchange> {
        if text.trim().is_empty() {
            return None;
        }
        let _turn = self.inner.chat_turn.lock().await;

        let user = ChatEntry::user(text);
        let (context, entries) = {
            let mut s = self.write();
            s.transcript.push(user.clone());
            s.is_typing = true;
            (s.chat_context(), s.transcript.len())
        };
        self.publish(StoreEvent::ChatUpdated { entries });
        self.publish(StoreEvent::TypingChanged { typing: true });

        let outcome = self.inner.assistant.chat(text, &context).await;

        let reply = ChatEntry::assistant(outcome.text());
        let entries = {
            let mut s = self.write();
            s.is_typing = false;
            s.transcript.push(reply.clone());
            s.transcript.len()
        };
        self.publish(StoreEvent::TypingChanged { typing: false });
        self.publish(StoreEvent::ChatUpdated { entries });

        Some(ChatExchange { user, reply, outcome })
    }

    /// Summarizes the current feedback and stores the text, unless a newer
    /// feedback revision was summarized while this call was in flight.
    pub async fn refresh_summary(&self) -> AiOutcome {
        let (revision, feedbacks) = {
            let s = self.read();
            (self.feedback_revision(), s.mess_feedbacks.clone())
        };

        let outcome = self.inner.assistant.summarize(&feedbacks).await;

        let applied = {
            let mut s = self.write();
            if s.summarized_revision.is_none_or(|done| revision >= done) {
                s.summary = outcome.text().to_string();
                s.summarized_revision = Some(revision);
                true
            } else {
                false
            }
        };
        if applied {
            self.publish(StoreEvent::SummaryUpdated);
        } else {
            log::debug!("Dropping stale summary for feedback revision {revision}");
        }
        outcome
    }
}
