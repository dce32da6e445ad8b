use std::collections::{HashMap, HashSet};

use crate::models::{Buyer, Match, ScheduleEntry, TimeSlot};

/// Result of one scheduling pass
#[derive(Debug, Clone, Default)]
pub struct ScheduleResult {
    pub entries: Vec<ScheduleEntry>,
    /// Matches no feasible slot (or remaining buyer capacity) was found for
    pub unscheduled: Vec<Match>,
}

impl ScheduleResult {
    pub fn unscheduled_count(&self) -> usize {
        self.unscheduled.len()
    }
}

/// Greedy first-fit meeting scheduler
///
/// Walks the already priority-sorted match list once and gives each match the
/// first chronological slot where neither party is booked. Higher-priority
/// matches therefore always get first claim on slots. No backtracking: once
/// assigned, an entry is never revised within a run.
#[derive(Debug, Clone, Default)]
pub struct Scheduler;

impl Scheduler {
    pub fn new() -> Self {
        Self
    }

    /// Assign matches to time slots, mutating each match's scheduled flag and
    /// slot reference in place.
    ///
    /// `matches` must already be in generator output order (priority
    /// ascending, score descending). A buyer that has reached its meeting
    /// limit accepts no further assignments, so binding seller choices beyond
    /// the limit surface as unscheduled instead of being dropped. Running out
    /// of slots is not an error; leftovers land in the unscheduled list.
    pub fn schedule(
        &self,
        matches: &mut [Match],
        buyers: &[Buyer],
        time_slots: &[TimeSlot],
    ) -> ScheduleResult {
        let mut slots: Vec<&TimeSlot> = time_slots.iter().collect();
        slots.sort_by(|a, b| a.date.cmp(&b.date).then_with(|| a.time.cmp(&b.time)));

        let buyer_limits: HashMap<&str, usize> = buyers
            .iter()
            .map(|b| (b.id.as_str(), b.meeting_limit))
            .collect();

        let mut buyer_booked: HashMap<String, HashSet<String>> = HashMap::new();
        let mut seller_booked: HashMap<String, HashSet<String>> = HashMap::new();
        let mut result = ScheduleResult::default();

        tracing::debug!("Scheduling {} matches over {} slots", matches.len(), slots.len());

        for m in matches.iter_mut() {
            let booked_count = buyer_booked.get(&m.buyer_id).map_or(0, HashSet::len);
            let at_limit = buyer_limits
                .get(m.buyer_id.as_str())
                .is_some_and(|limit| booked_count >= *limit);

            let slot = if at_limit {
                None
            } else {
                slots.iter().find(|slot| {
                    let buyer_free = buyer_booked
                        .get(&m.buyer_id)
                        .map_or(true, |taken| !taken.contains(&slot.id));
                    let seller_free = seller_booked
                        .get(&m.seller_id)
                        .map_or(true, |taken| !taken.contains(&slot.id));
                    buyer_free && seller_free
                })
            };

            match slot {
                Some(slot) => {
                    buyer_booked
                        .entry(m.buyer_id.clone())
                        .or_default()
                        .insert(slot.id.clone());
                    seller_booked
                        .entry(m.seller_id.clone())
                        .or_default()
                        .insert(slot.id.clone());

                    m.scheduled = true;
                    m.time_slot = Some(slot.id.clone());

                    result.entries.push(ScheduleEntry {
                        buyer_id: m.buyer_id.clone(),
                        seller_id: m.seller_id.clone(),
                        time_slot: slot.id.clone(),
                        date: slot.date,
                        time: slot.time,
                        duration: slot.duration_minutes,
                        match_type: m.match_type,
                        compatibility_score: m.compatibility_score,
                        priority: m.priority,
                    });
                }
                None => {
                    result.unscheduled.push(m.clone());
                }
            }
        }

        tracing::debug!(
            "Scheduled {} meetings, {} left unscheduled",
            result.entries.len(),
            result.unscheduled.len()
        );

        result
    }
}
