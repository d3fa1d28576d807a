use jiff::civil::date;
use uuid::Uuid;

use crate::{
    locale::Language,
    models::{BookKind, DashboardStats, Participant, PlanFilter, PlanStatus, ReadingPlan},
    params::ListPlans,
};

fn participant(name: &str, start_page: u32, end_page: u32, progress: f64) -> Participant {
    Participant {
        id: Uuid::new_v4(),
        name: name.to_string(),
        start_page,
        end_page,
        pages_per_day: 10,
        progress,
    }
}

fn create_test_plan(owner: &str, status: PlanStatus, participants: Vec<Participant>) -> ReadingPlan {
    ReadingPlan {
        id: Uuid::new_v4(),
        book: BookKind::CustomWork {
            name: "Novel".to_string(),
        },
        total_pages: 300,
        participants,
        start_date: date(2024, 3, 1),
        end_date: date(2024, 3, 11),
        created_by: owner.to_string(),
        status,
        progress: 0.0,
    }
}

fn trio() -> Vec<Participant> {
    vec![
        participant("Amina", 1, 100, 0.0),
        participant("Bilal", 101, 200, 0.0),
        participant("Chafik", 201, 300, 0.0),
    ]
}

#[test]
fn test_book_kind_serializes_with_tag() {
    let fixed = serde_json::to_value(BookKind::FixedWork).unwrap();
    assert_eq!(fixed, serde_json::json!({"bookType": "quran"}));

    let custom = serde_json::to_value(BookKind::CustomWork {
        name: "Novel".to_string(),
    })
    .unwrap();
    assert_eq!(
        custom,
        serde_json::json!({"bookType": "custom", "bookName": "Novel"})
    );
}

#[test]
fn test_plan_flattens_book_fields() {
    let plan = create_test_plan("u1", PlanStatus::Active, trio());
    let value = serde_json::to_value(&plan).unwrap();

    assert_eq!(value["bookType"], "custom");
    assert_eq!(value["bookName"], "Novel");
    assert_eq!(value["totalPages"], 300);
    assert_eq!(value["startDate"], "2024-03-01");
    assert_eq!(value["createdBy"], "u1");
    assert_eq!(value["status"], "active");
    assert_eq!(value["participants"][1]["startPage"], 101);
    assert!(value.get("book").is_none());

    let back: ReadingPlan = serde_json::from_value(value).unwrap();
    assert_eq!(back, plan);
}

#[test]
fn test_plan_status_defaults_when_missing() {
    let mut value = serde_json::to_value(create_test_plan("u1", PlanStatus::Archived, trio())).unwrap();
    value.as_object_mut().unwrap().remove("status");

    let plan: ReadingPlan = serde_json::from_value(value).unwrap();
    assert_eq!(plan.status, PlanStatus::Active);
}

#[test]
fn test_plan_status_from_str() {
    assert_eq!("active".parse::<PlanStatus>(), Ok(PlanStatus::Active));
    assert_eq!("Completed".parse::<PlanStatus>(), Ok(PlanStatus::Completed));
    assert_eq!("ARCHIVED".parse::<PlanStatus>(), Ok(PlanStatus::Archived));
    assert!("paused".parse::<PlanStatus>().is_err());
}

#[test]
fn test_titles() {
    let plan = create_test_plan("u1", PlanStatus::Active, trio());
    assert_eq!(plan.title(Language::French), "Novel");
    assert_eq!(BookKind::FixedWork.title(Language::English), "Quran Reading");
    assert_eq!(BookKind::FixedWork.title(Language::French), "Lecture du Coran");
}

#[test]
fn test_days_remaining_and_duration() {
    let plan = create_test_plan("u1", PlanStatus::Active, trio());
    assert_eq!(plan.duration_days(), 10);
    assert_eq!(plan.days_remaining(date(2024, 3, 1)), 10);
    assert_eq!(plan.days_remaining(date(2024, 3, 11)), 0);
    assert!(plan.days_remaining(date(2024, 3, 20)) < 0);
}

#[test]
fn test_participant_helpers() {
    let p = participant("Amina", 101, 250, 20.0);
    assert_eq!(p.range_width(), 150);
    assert_eq!(p.pages_read_estimate(), 30);
    assert!(!p.is_finished());
    assert!(participant("Bilal", 1, 5, 100.0).is_finished());
}

#[test]
fn test_find_participant_by_name_and_id() {
    let plan = create_test_plan("u1", PlanStatus::Active, trio());
    let bilal = plan.participants[1].id;

    assert_eq!(plan.find_participant("bilal").unwrap(), Some(bilal));
    assert_eq!(plan.find_participant(" Bilal ").unwrap(), Some(bilal));
    assert_eq!(plan.find_participant(&bilal.to_string()).unwrap(), Some(bilal));

    let prefix = &bilal.to_string()[..8];
    assert_eq!(plan.find_participant(prefix).unwrap(), Some(bilal));

    let unhyphenated = &bilal.simple().to_string()[..12];
    assert_eq!(plan.find_participant(unhyphenated).unwrap(), Some(bilal));
    assert_eq!(plan.find_participant(&bilal.to_string()[..13]).unwrap(), Some(bilal));
}

#[test]
fn test_find_participant_misses() {
    let plan = create_test_plan("u1", PlanStatus::Active, trio());
    assert_eq!(plan.find_participant("Dalia").unwrap(), None);
    assert_eq!(plan.find_participant("").unwrap(), None);
    assert_eq!(plan.find_participant("-").unwrap(), None);
    assert_eq!(plan.find_participant(&Uuid::new_v4().to_string()).unwrap(), None);
}

#[test]
fn test_find_participant_ambiguous_name() {
    let plan = create_test_plan(
        "u1",
        PlanStatus::Active,
        vec![participant("Sam", 1, 50, 0.0), participant("sam", 51, 100, 0.0)],
    );
    let err = plan.find_participant("SAM").unwrap_err();
    assert_eq!(err.field(), Some("participant"));
}

#[test]
fn test_recompute_progress_completes_active_plan() {
    let mut plan = create_test_plan("u1", PlanStatus::Active, trio());
    plan.participants[0].progress = 100.0;
    plan.recompute_progress();
    assert_eq!(plan.progress, 100.0 / 3.0);
    assert_eq!(plan.status, PlanStatus::Active);

    for p in &mut plan.participants {
        p.progress = 100.0;
    }
    plan.recompute_progress();
    assert_eq!(plan.progress, 100.0);
    assert_eq!(plan.status, PlanStatus::Completed);

    plan.participants[2].progress = 50.0;
    plan.recompute_progress();
    assert_eq!(plan.status, PlanStatus::Completed);
}

#[test]
fn test_recompute_progress_keeps_archived() {
    let mut plan = create_test_plan("u1", PlanStatus::Archived, trio());
    for p in &mut plan.participants {
        p.progress = 100.0;
    }
    plan.recompute_progress();
    assert_eq!(plan.progress, 100.0);
    assert_eq!(plan.status, PlanStatus::Archived);
}

#[test]
fn test_plan_filter_matches() {
    let plan = create_test_plan("u1", PlanStatus::Archived, trio());

    assert!(PlanFilter::default().matches(&plan));
    assert!(PlanFilter::for_owner("u1", None).matches(&plan));
    assert!(PlanFilter::for_owner("u1", Some(PlanStatus::Archived)).matches(&plan));
    assert!(!PlanFilter::for_owner("u1", Some(PlanStatus::Active)).matches(&plan));
    assert!(!PlanFilter::for_owner("u2", None).matches(&plan));
}

#[test]
fn test_plan_filter_from_list_params() {
    let active_only = PlanFilter::from(&ListPlans::default());
    assert_eq!(active_only.status, Some(PlanStatus::Active));

    let everything = PlanFilter::from(&ListPlans {
        owner: Some("u1".to_string()),
        status: None,
        all: true,
    });
    assert_eq!(everything.status, None);
    assert_eq!(everything.owner.as_deref(), Some("u1"));

    let explicit = PlanFilter::from(&ListPlans {
        owner: None,
        status: Some(PlanStatus::Completed),
        all: true,
    });
    assert_eq!(explicit.status, Some(PlanStatus::Completed));
}

#[test]
fn test_dashboard_stats() {
    let mut active = create_test_plan("u1", PlanStatus::Active, trio());
    active.progress = 50.0;
    let mut done = create_test_plan("u1", PlanStatus::Completed, vec![participant("A", 1, 10, 100.0)]);
    done.progress = 100.0;
    let archived = create_test_plan("u1", PlanStatus::Archived, trio());

    let stats = DashboardStats::from_plans([&active, &done, &archived]);
    assert_eq!(stats.active_plans, 1);
    assert_eq!(stats.completed_plans, 1);
    assert_eq!(stats.archived_plans, 1);
    assert_eq!(stats.total_plans(), 3);
    assert_eq!(stats.total_participants, 7);
    assert_eq!(stats.average_progress, 50.0);

    assert_eq!(DashboardStats::from_plans(Vec::<&ReadingPlan>::new()), DashboardStats::default());
}
