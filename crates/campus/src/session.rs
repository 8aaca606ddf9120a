//! The per-course viewing session: progress tracking and access gating.
//!
//! A [`CourseSession`] is constructed once per course view from a catalog
//! snapshot, the viewer's resolved subscription status, and the local state
//! store. It owns every derived value the lesson viewer and certificate flow
//! render from: the watched set, completion percentage, favorite membership,
//! notes, and the one-shot completion transition.
//!
//! All state transitions happen on discrete calls from a single logical
//! actor. Mutations of the global collections (favorites, saved courses, the
//! completion ledger) re-read the latest stored array before applying the
//! change, so rapid sequential actions don't clobber each other.

use chrono::Utc;
use tracing::{debug, trace, warn};

use crate::{
  access::{self, AccessDecision, SubscriptionStatus},
  certificate::CompletionLedger,
  course::{Course, CourseSnapshot, Lesson},
  error::{CampusError, Result},
  notes::{self, Note},
  store::{keys, Storage},
};

/// Emitted exactly once, on the false-to-true completion edge of a fill
/// sequence. The caller uses it to trigger the one-time congratulations
/// presentation and unlock the certificate route.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompletionEvent {
  /// The course that just completed
  pub course_id: String,
}

/// Progress and access tracker for one course-viewing session.
pub struct CourseSession<'a> {
  store:          &'a Storage,
  course:         Course,
  lessons:        Vec<Lesson>,
  subscription:   SubscriptionStatus,
  /// Persisted watched set, cached in insertion order
  watched:        Vec<String>,
  /// Persisted note list, newest first
  notes:          Vec<Note>,
  current_lesson: Option<String>,
  /// Completion state at the last evaluation, for edge detection
  was_complete:   bool,
}

impl<'a> CourseSession<'a> {
  /// Opens a session for the snapshot's course, loading persisted state.
  ///
  /// The snapshot must be tagged for its own course; a mismatched tag means
  /// the caller routed a stale fetch here and gets
  /// [`CampusError::StaleSnapshot`].
  pub async fn open(
    store: &'a Storage,
    snapshot: CourseSnapshot,
    subscription: SubscriptionStatus,
  ) -> Result<Self> {
    if !snapshot.is_for(&snapshot.course.id) {
      return Err(CampusError::StaleSnapshot {
        want: snapshot.course.id.clone(),
        got:  snapshot.course_id,
      });
    }

    let CourseSnapshot { course, lessons, .. } = snapshot;
    let watched = store.read_array(&keys::watched_key(&course.id)).await?;
    let notes = store.read_array(&keys::notes_key(&course.id)).await?;

    let mut session = Self {
      store,
      course,
      lessons,
      subscription,
      watched,
      notes,
      current_lesson: None,
      was_complete: false,
    };
    // A course already complete on load must not re-fire the transition.
    session.was_complete = session.evaluate_completion();
    debug!(
      course_id = %session.course.id,
      lessons = session.lessons.len(),
      watched = session.watched.len(),
      complete = session.was_complete,
      "opened course session"
    );
    Ok(session)
  }

  /// Applies a refreshed snapshot to the session.
  ///
  /// A snapshot tagged for a different course is a response that resolved
  /// after the viewer navigated here: it is discarded silently (returns
  /// `false`), never applied and never an error.
  pub fn apply_snapshot(&mut self, snapshot: CourseSnapshot) -> bool {
    if !snapshot.is_for(&self.course.id) {
      debug!(
        active = %self.course.id,
        stale = %snapshot.course_id,
        "discarding snapshot for a course the viewer navigated away from"
      );
      return false;
    }
    self.course = snapshot.course;
    self.lessons = snapshot.lessons;
    self.was_complete = self.evaluate_completion();
    true
  }

  /// The course under view.
  pub fn course(&self) -> &Course { &self.course }

  /// The lesson list, in catalog order.
  pub fn lessons(&self) -> &[Lesson] { &self.lessons }

  /// The subscription status the session gates with.
  pub fn subscription(&self) -> SubscriptionStatus { self.subscription }

  /// Updates the gating status once a late subscription fetch resolves.
  pub fn set_subscription(&mut self, status: SubscriptionStatus) { self.subscription = status; }

  /// Selects the lesson subsequent notes attach to.
  ///
  /// Returns `false` (and leaves the selection unchanged) when the id isn't
  /// in the lesson list.
  pub fn select_lesson(&mut self, lesson_id: &str) -> bool {
    if self.lessons.iter().any(|l| l.id == lesson_id) {
      self.current_lesson = Some(lesson_id.to_string());
      true
    } else {
      false
    }
  }

  /// The currently selected lesson id, if any.
  pub fn current_lesson(&self) -> Option<&str> { self.current_lesson.as_deref() }

  // --- watched set -------------------------------------------------------

  /// Marks a lesson watched. Idempotent: marking twice equals marking once.
  ///
  /// Unknown lesson ids are recorded anyway (orphans are harmless and
  /// filtered out of progress computation). Returns a [`CompletionEvent`]
  /// exactly on the transition that watched the course's last unwatched
  /// lesson; the event also appends the course to the completion ledger.
  pub async fn mark_watched(&mut self, lesson_id: &str) -> Result<Option<CompletionEvent>> {
    let key = keys::watched_key(&self.course.id);
    let mut watched: Vec<String> = self.store.read_array(&key).await?;
    if !watched.iter().any(|id| id == lesson_id) {
      watched.push(lesson_id.to_string());
      self.store.write_array(&key, &watched).await?;
    }
    self.watched = watched;

    if !self.lessons.iter().any(|l| l.id == lesson_id) {
      trace!(lesson_id, "marked a lesson id not present in the current lesson list");
    }

    let complete = self.evaluate_completion();
    if complete && !self.was_complete {
      self.was_complete = true;
      CompletionLedger::new(self.store).record(&self.course.id).await?;
      debug!(course_id = %self.course.id, "course completed");
      return Ok(Some(CompletionEvent { course_id: self.course.id.clone() }));
    }
    self.was_complete = complete;
    Ok(None)
  }

  /// Removes a lesson from the watched set.
  ///
  /// The viewer UI never exposes this; it exists so tests (and support
  /// tooling) can rewind progress. Rewinding past the completion boundary
  /// arms the transition again for the next fill sequence, while the
  /// completion ledger keeps its entry.
  pub async fn unmark_watched(&mut self, lesson_id: &str) -> Result<()> {
    let key = keys::watched_key(&self.course.id);
    let mut watched: Vec<String> = self.store.read_array(&key).await?;
    watched.retain(|id| id != lesson_id);
    self.store.write_array(&key, &watched).await?;
    self.watched = watched;
    self.was_complete = self.evaluate_completion();
    Ok(())
  }

  /// Watched lesson ids, including orphans.
  pub fn watched(&self) -> &[String] { &self.watched }

  /// Number of current lessons that are watched (orphans excluded).
  pub fn watched_count(&self) -> usize {
    self.lessons.iter().filter(|l| self.watched.iter().any(|id| *id == l.id)).count()
  }

  // --- derived progress --------------------------------------------------

  /// Binary per-lesson progress: 100 if watched, else 0.
  ///
  /// There is no partial-watch percentage; the platform tracks lessons as
  /// whole units.
  pub fn lesson_progress(&self, lesson_id: &str) -> u8 {
    if self.watched.iter().any(|id| id == lesson_id) {
      100
    } else {
      0
    }
  }

  /// Completion percentage over the current lesson list, rounded to the
  /// nearest integer. An empty lesson list is 0, never a division by zero.
  pub fn course_progress(&self) -> u8 {
    if self.lessons.is_empty() {
      return 0;
    }
    let watched = self.watched_count() as f64;
    let total = self.lessons.len() as f64;
    (100.0 * watched / total).round() as u8
  }

  /// True iff every lesson in a non-empty lesson list is watched.
  ///
  /// Pure over the session's loaded state; safe to call before lessons have
  /// arrived because the empty list can never read as completed.
  pub fn evaluate_completion(&self) -> bool {
    !self.lessons.is_empty() && self.watched_count() == self.lessons.len()
  }

  /// Re-records a currently-complete course in the completion ledger.
  ///
  /// The ledger normally receives the course id on the completion edge; if
  /// the entry went missing (cleared store, imported profile) this puts it
  /// back without duplicating existing entries.
  pub async fn sync_completion_record(&self) -> Result<()> {
    if self.evaluate_completion() {
      CompletionLedger::new(self.store).record(&self.course.id).await?;
    }
    Ok(())
  }

  // --- access gating -----------------------------------------------------

  /// Whether the selected lesson's video content may be shown right now.
  ///
  /// Evaluated per view attempt against the current subscription status;
  /// never cached, so a renewal mid-session takes effect on the next click.
  pub fn can_view_lesson(&self) -> AccessDecision { access::can_view_lesson(self.subscription) }

  // --- favorites ---------------------------------------------------------

  /// Flips the lesson's membership in the global favorite set.
  ///
  /// Returns the new membership state. Lesson validity is not checked; the
  /// favorite set is global and outlives any one course's lesson list.
  pub async fn toggle_favorite(&self, lesson_id: &str) -> Result<bool> {
    let mut favorites: Vec<String> = self.store.read_array(keys::FAVORITE_LESSONS).await?;
    let now_favorite = if favorites.iter().any(|id| id == lesson_id) {
      favorites.retain(|id| id != lesson_id);
      false
    } else {
      favorites.push(lesson_id.to_string());
      true
    };
    self.store.write_array(keys::FAVORITE_LESSONS, &favorites).await?;
    Ok(now_favorite)
  }

  /// True if the lesson is currently favorited.
  pub async fn is_favorite(&self, lesson_id: &str) -> Result<bool> {
    let favorites: Vec<String> = self.store.read_array(keys::FAVORITE_LESSONS).await?;
    Ok(favorites.iter().any(|id| id == lesson_id))
  }

  // --- notes -------------------------------------------------------------

  /// Notes for this course, newest first.
  pub fn notes(&self) -> &[Note] { &self.notes }

  /// Prepends a note for the currently selected lesson.
  ///
  /// Fails with [`CampusError::NoLessonSelected`] when nothing is selected
  /// and [`CampusError::EmptyNote`] when the trimmed content is empty; in
  /// both cases the note list is untouched.
  pub async fn save_note(&mut self, content: &str) -> Result<&Note> {
    let lesson_id = self.current_lesson.clone().ok_or(CampusError::NoLessonSelected)?;

    let key = keys::notes_key(&self.course.id);
    let mut stored: Vec<Note> = self.store.read_array(&key).await?;
    let note = Note::create(lesson_id, content, Utc::now(), &stored)?;
    stored.insert(0, note);
    self.store.write_array(&key, &stored).await?;
    self.notes = stored;
    Ok(&self.notes[0])
  }

  /// Rewrites a note's content and refreshes its timestamp.
  ///
  /// Empty content and unknown ids change nothing; returns whether a note
  /// was updated.
  pub async fn update_note(&mut self, note_id: i64, content: &str) -> Result<bool> {
    let key = keys::notes_key(&self.course.id);
    let mut stored: Vec<Note> = self.store.read_array(&key).await?;
    let changed = notes::update_note(&mut stored, note_id, content, Utc::now());
    if changed {
      self.store.write_array(&key, &stored).await?;
      self.notes = stored;
    }
    Ok(changed)
  }

  /// Deletes a note by id; returns whether anything was removed.
  pub async fn delete_note(&mut self, note_id: i64) -> Result<bool> {
    let key = keys::notes_key(&self.course.id);
    let mut stored: Vec<Note> = self.store.read_array(&key).await?;
    let removed = notes::delete_note(&mut stored, note_id);
    if removed {
      self.store.write_array(&key, &stored).await?;
      self.notes = stored;
    }
    Ok(removed)
  }

  // --- saved courses and ratings -----------------------------------------

  /// Flips this course's membership in the global saved-courses set.
  pub async fn toggle_saved(&self) -> Result<bool> {
    let mut saved: Vec<String> = self.store.read_array(keys::SAVED_COURSES).await?;
    let now_saved = if saved.iter().any(|id| id == &self.course.id) {
      saved.retain(|id| id != &self.course.id);
      false
    } else {
      saved.push(self.course.id.clone());
      true
    };
    self.store.write_array(keys::SAVED_COURSES, &saved).await?;
    Ok(now_saved)
  }

  /// True if this course is in the saved set.
  pub async fn is_saved(&self) -> Result<bool> {
    let saved: Vec<String> = self.store.read_array(keys::SAVED_COURSES).await?;
    Ok(saved.iter().any(|id| id == &self.course.id))
  }

  /// Records the viewer's 1-5 star rating, replacing any previous one.
  pub async fn rate_course(&self, stars: u8) -> Result<()> {
    if !(1..=5).contains(&stars) {
      return Err(CampusError::InvalidRating(stars));
    }
    self.store.write_array(&keys::rating_key(&self.course.id), &[stars]).await
  }

  /// The viewer's current rating, if any.
  ///
  /// A malformed stored value reads as unrated, like every other corrupt
  /// state key.
  pub async fn rating(&self) -> Result<Option<u8>> {
    let stored: Vec<u8> = self.store.read_array(&keys::rating_key(&self.course.id)).await?;
    match stored.first() {
      Some(&stars) if (1..=5).contains(&stars) => Ok(Some(stars)),
      Some(&stars) => {
        warn!(course_id = %self.course.id, stars, "ignoring out-of-range stored rating");
        Ok(None)
      },
      None => Ok(None),
    }
  }
}
