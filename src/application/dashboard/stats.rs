use crate::domain::registrations::{
    Membership, Registration, RegistrationRepository, RegistrationStatus,
};
use crate::shared::error::AppError;
use serde::Serialize;
use std::sync::Arc;
use time::{Date, Duration, OffsetDateTime};
use utoipa::ToSchema;

/// The trend covers the 7 most recent calendar days, today included.
pub const TREND_DAYS: i64 = 7;

/// How many registrations the recent-activity panel shows.
pub const RECENT_ACTIVITY_LIMIT: usize = 5;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TrendPoint {
    #[schema(example = "2026-08-30")]
    pub date: String,
    pub count: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BreakdownEntry {
    pub label: String,
    pub count: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RevenueEntry {
    pub membership: String,
    pub revenue: i64,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    pub total_registrations: i64,
    pub pending_count: i64,
    pub approved_count: i64,
    pub rejected_count: i64,
    pub total_revenue: i64,
    pub registration_trend: Vec<TrendPoint>,
    #[schema(value_type = Vec<Object>)]
    pub recent_activity: Vec<Registration>,
    pub by_chapter: Vec<BreakdownEntry>,
    pub by_gender: Vec<BreakdownEntry>,
    pub by_membership: Vec<BreakdownEntry>,
    pub revenue_by_membership: Vec<RevenueEntry>,
}

fn status_count(list: &[Registration], status: RegistrationStatus) -> i64 {
    list.iter().filter(|r| r.status == status).count() as i64
}

/// Only Approved registrations contribute revenue; the fee recorded on a
/// Pending or Rejected submission is not money in hand.
pub fn total_revenue(list: &[Registration]) -> i64 {
    list.iter()
        .filter(|r| r.status == RegistrationStatus::Approved)
        .map(|r| r.payment_amount)
        .sum()
}

pub fn pending_count(list: &[Registration]) -> i64 {
    status_count(list, RegistrationStatus::Pending)
}

/// Per-calendar-day creation counts for the `TREND_DAYS` days ending at
/// `today`, oldest day first. Bucketing is by date, not time of day.
pub fn trend(list: &[Registration], today: Date) -> Vec<TrendPoint> {
    (0..TREND_DAYS)
        .rev()
        .map(|offset| {
            let day = today - Duration::days(offset);
            let count = list
                .iter()
                .filter(|r| r.created_at.date() == day)
                .count() as i64;
            TrendPoint {
                date: day.to_string(),
                count,
            }
        })
        .collect()
}

/// The five most recently created registrations, newest first.
pub fn recent_activity(list: &[Registration]) -> Vec<Registration> {
    let mut sorted: Vec<Registration> = list.to_vec();
    sorted.sort_by(|a, b| (b.created_at, b.id).cmp(&(a.created_at, a.id)));
    sorted.truncate(RECENT_ACTIVITY_LIMIT);
    sorted
}

/// Group-count by a categorical field, in first-occurrence order. Empty
/// categories do not appear; the zero-filled variant below is specific to
/// revenue by membership.
pub fn breakdown_by<F>(list: &[Registration], field: F) -> Vec<BreakdownEntry>
where
    F: Fn(&Registration) -> String,
{
    let mut entries: Vec<BreakdownEntry> = Vec::new();
    for registration in list {
        let label = field(registration);
        match entries.iter_mut().find(|e| e.label == label) {
            Some(entry) => entry.count += 1,
            None => entries.push(BreakdownEntry { label, count: 1 }),
        }
    }
    entries
}

/// Approved revenue grouped by membership. Both known membership types are
/// always present, zero-filled, so the dashboard chart never loses a slice.
pub fn revenue_by_membership(list: &[Registration]) -> Vec<RevenueEntry> {
    [Membership::Alumni, Membership::Member]
        .into_iter()
        .map(|membership| RevenueEntry {
            membership: membership.to_string(),
            revenue: list
                .iter()
                .filter(|r| {
                    r.status == RegistrationStatus::Approved && r.membership == membership
                })
                .map(|r| r.payment_amount)
                .sum(),
        })
        .collect()
}

pub fn compute(list: &[Registration], today: Date) -> DashboardStats {
    DashboardStats {
        total_registrations: list.len() as i64,
        pending_count: pending_count(list),
        approved_count: status_count(list, RegistrationStatus::Approved),
        rejected_count: status_count(list, RegistrationStatus::Rejected),
        total_revenue: total_revenue(list),
        registration_trend: trend(list, today),
        recent_activity: recent_activity(list),
        by_chapter: breakdown_by(list, |r| r.chapter.clone()),
        by_gender: breakdown_by(list, |r| r.gender.clone()),
        by_membership: breakdown_by(list, |r| r.membership.to_string()),
        revenue_by_membership: revenue_by_membership(list),
    }
}

pub struct DashboardStatsUseCase {
    repo: Arc<dyn RegistrationRepository>,
}

impl DashboardStatsUseCase {
    pub fn new(repo: Arc<dyn RegistrationRepository>) -> Self {
        Self { repo }
    }

    /// One full fetch, then everything is derived in memory. The list is a
    /// transient snapshot; nothing is written back.
    pub async fn execute(&self) -> Result<DashboardStats, AppError> {
        let list = self.repo.find_all().await?;
        Ok(compute(&list, OffsetDateTime::now_utc().date()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::datetime;

    fn registration(
        id: i64,
        membership: Membership,
        status: RegistrationStatus,
        created_at: OffsetDateTime,
    ) -> Registration {
        Registration {
            id,
            first_name: format!("First{}", id),
            middle_name: None,
            last_name: format!("Last{}", id),
            gender: "Female".to_string(),
            date_of_birth: "1990-01-01".to_string(),
            place_of_birth: String::new(),
            address: String::new(),
            region: String::new(),
            province: String::new(),
            city: String::new(),
            barangay: String::new(),
            chapter: "Manila".to_string(),
            membership,
            payment_amount: membership.fee(),
            status,
            confirmed_by: None,
            contact_number: format!("0917000{:04}", id),
            email_address: format!("r{}@x.com", id),
            created_at,
            updated_at: created_at,
        }
    }

    const NOW: OffsetDateTime = datetime!(2026-08-30 12:00 UTC);

    #[test]
    fn test_total_revenue_counts_only_approved() {
        let list = vec![
            registration(1, Membership::Alumni, RegistrationStatus::Approved, NOW),
            registration(2, Membership::Member, RegistrationStatus::Approved, NOW),
            registration(3, Membership::Alumni, RegistrationStatus::Pending, NOW),
            registration(4, Membership::Member, RegistrationStatus::Rejected, NOW),
        ];

        assert_eq!(total_revenue(&list), 1500);
    }

    #[test]
    fn test_pending_count() {
        let list = vec![
            registration(1, Membership::Member, RegistrationStatus::Pending, NOW),
            registration(2, Membership::Member, RegistrationStatus::Pending, NOW),
            registration(3, Membership::Member, RegistrationStatus::Approved, NOW),
        ];

        assert_eq!(pending_count(&list), 2);
    }

    #[test]
    fn test_trend_buckets_by_calendar_day_oldest_first() {
        let today = NOW.date();
        let list = vec![
            registration(1, Membership::Member, RegistrationStatus::Pending, NOW),
            // Two yesterday, at different times of day.
            registration(
                2,
                Membership::Member,
                RegistrationStatus::Pending,
                datetime!(2026-08-29 00:05 UTC),
            ),
            registration(
                3,
                Membership::Member,
                RegistrationStatus::Pending,
                datetime!(2026-08-29 23:55 UTC),
            ),
            // Oldest day still inside the window.
            registration(
                4,
                Membership::Member,
                RegistrationStatus::Pending,
                datetime!(2026-08-24 09:00 UTC),
            ),
            // One day too old; excluded.
            registration(
                5,
                Membership::Member,
                RegistrationStatus::Pending,
                datetime!(2026-08-23 09:00 UTC),
            ),
        ];

        let points = trend(&list, today);

        assert_eq!(points.len(), 7);
        assert_eq!(points[0].date, "2026-08-24");
        assert_eq!(points[6].date, "2026-08-30");
        assert_eq!(points[0].count, 1);
        assert_eq!(points[5].count, 2);
        assert_eq!(points[6].count, 1);

        let in_window: i64 = points.iter().map(|p| p.count).sum();
        assert_eq!(in_window, 4);
    }

    #[test]
    fn test_trend_on_empty_list_is_zero_filled() {
        let points = trend(&[], NOW.date());
        assert_eq!(points.len(), 7);
        assert!(points.iter().all(|p| p.count == 0));
    }

    #[test]
    fn test_recent_activity_is_five_newest_first() {
        let list: Vec<Registration> = (1..=8)
            .map(|i| {
                registration(
                    i,
                    Membership::Member,
                    RegistrationStatus::Pending,
                    NOW + Duration::minutes(i),
                )
            })
            .collect();

        let recent = recent_activity(&list);

        assert_eq!(recent.len(), 5);
        let ids: Vec<i64> = recent.iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![8, 7, 6, 5, 4]);
    }

    #[test]
    fn test_breakdown_preserves_first_occurrence_order() {
        let mut list = vec![
            registration(1, Membership::Member, RegistrationStatus::Pending, NOW),
            registration(2, Membership::Member, RegistrationStatus::Pending, NOW),
            registration(3, Membership::Member, RegistrationStatus::Pending, NOW),
        ];
        list[0].chapter = "Cebu".to_string();
        list[1].chapter = "Manila".to_string();
        list[2].chapter = "Cebu".to_string();

        let entries = breakdown_by(&list, |r| r.chapter.clone());

        assert_eq!(
            entries,
            vec![
                BreakdownEntry {
                    label: "Cebu".to_string(),
                    count: 2
                },
                BreakdownEntry {
                    label: "Manila".to_string(),
                    count: 1
                },
            ]
        );
    }

    #[test]
    fn test_revenue_by_membership_is_zero_filled() {
        let list = vec![registration(
            1,
            Membership::Alumni,
            RegistrationStatus::Approved,
            NOW,
        )];

        let entries = revenue_by_membership(&list);

        assert_eq!(
            entries,
            vec![
                RevenueEntry {
                    membership: "Alumni".to_string(),
                    revenue: 1000
                },
                RevenueEntry {
                    membership: "Member".to_string(),
                    revenue: 0
                },
            ]
        );
    }

    #[test]
    fn test_revenue_by_membership_ignores_unapproved() {
        let list = vec![
            registration(1, Membership::Alumni, RegistrationStatus::Pending, NOW),
            registration(2, Membership::Member, RegistrationStatus::Rejected, NOW),
        ];

        let entries = revenue_by_membership(&list);
        assert!(entries.iter().all(|e| e.revenue == 0));
    }

    #[test]
    fn test_compute_assembles_all_panels() {
        let list = vec![
            registration(1, Membership::Alumni, RegistrationStatus::Approved, NOW),
            registration(2, Membership::Member, RegistrationStatus::Pending, NOW),
        ];

        let stats = compute(&list, NOW.date());

        assert_eq!(stats.total_registrations, 2);
        assert_eq!(stats.pending_count, 1);
        assert_eq!(stats.approved_count, 1);
        assert_eq!(stats.rejected_count, 0);
        assert_eq!(stats.total_revenue, 1000);
        assert_eq!(stats.registration_trend.len(), 7);
        assert_eq!(stats.recent_activity.len(), 2);
        assert_eq!(stats.by_membership.len(), 2);
        assert_eq!(stats.revenue_by_membership.len(), 2);
    }
}
