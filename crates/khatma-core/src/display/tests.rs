use jiff::civil::{date, Date};
use uuid::Uuid;

use super::*;
use crate::{
    locale::Language,
    models::{BookKind, DashboardStats, Participant, PlanStatus, ReadingPlan},
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

fn create_test_plan(book: BookKind, status: PlanStatus) -> ReadingPlan {
    ReadingPlan {
        id: Uuid::parse_str("4b8f1d9e-2c3a-4f5b-8d6e-7a9b0c1d2e3f").unwrap(),
        book,
        total_pages: 300,
        participants: vec![
            participant("A", 1, 100, 0.0),
            participant("B", 101, 200, 100.0),
            participant("C", 201, 300, 0.0),
        ],
        start_date: date(2024, 3, 1),
        end_date: date(2024, 3, 11),
        created_by: "u1".to_string(),
        status,
        progress: 100.0 / 3.0,
    }
}

fn novel() -> BookKind {
    BookKind::CustomWork {
        name: "Novel".to_string(),
    }
}

const DAY_FIVE: Date = date(2024, 3, 6);

#[test]
fn test_plan_card_english() {
    let plan = create_test_plan(novel(), PlanStatus::Active);
    let output = PlanCard::new(&plan, DAY_FIVE, Language::English).to_string();

    assert!(output.contains("### Novel (4b8f1d9e)"));
    assert!(output.contains("- Created on 2024-03-01"));
    assert!(output.contains("- 3 participants"));
    assert!(output.contains("- Progress: 33%"));
    assert!(output.contains("- 5 days remaining"));
    assert!(!output.contains("Archived"));
}

#[test]
fn test_plan_card_french_fixed_work() {
    let plan = create_test_plan(BookKind::FixedWork, PlanStatus::Archived);
    let output = PlanCard::new(&plan, DAY_FIVE, Language::French).to_string();

    assert!(output.contains("### Lecture du Coran"));
    assert!(output.contains("- Créé le 2024-03-01"));
    assert!(output.contains("- Progrès: 33%"));
    assert!(output.contains("▣ Archivé"));
    assert!(output.contains("5 jours restants"));
}

#[test]
fn test_countdown_after_end_date() {
    let plan = create_test_plan(novel(), PlanStatus::Active);

    let on_end = Countdown {
        plan: &plan,
        today: date(2024, 3, 11),
        lang: Language::English,
    };
    assert_eq!(on_end.to_string(), "Plan ended");

    let later = Countdown {
        plan: &plan,
        today: date(2024, 4, 1),
        lang: Language::French,
    };
    assert_eq!(later.to_string(), "Plan terminé");
}

#[test]
fn test_plan_details_lists_participants() {
    let plan = create_test_plan(novel(), PlanStatus::Active);
    let output = PlanDetails::new(&plan, DAY_FIVE, Language::English).to_string();

    assert!(output.starts_with("# Novel\n"));
    assert!(output.contains("- ID: 4b8f1d9e-2c3a-4f5b-8d6e-7a9b0c1d2e3f"));
    assert!(output.contains("- Status: ➤ Active"));
    assert!(output.contains("- Dates: 2024-03-01 → 2024-03-11"));
    assert!(output.contains("## Participants"));
    assert!(output.contains("Pages 1-100 (10 pages/day), 0/100 read, 0%"));
    assert!(output.contains("Pages 101-200 (10 pages/day), 100/100 read, 100% ✓\n"));
    assert!(output.contains("Pages 1-100 (10 pages/day), 0/100 read, 0%\n"));
}

#[test]
fn test_participant_line_french() {
    let p = participant("Bilal", 1, 150, 50.0);
    let output = ParticipantLine {
        participant: &p,
        lang: Language::French,
    }
    .to_string();

    assert!(output.starts_with("- **Bilal**"));
    assert!(output.contains("(10 pages/jour), 75/150 lues, 50%"));
}

#[test]
fn test_plan_cards_empty_and_filled() {
    let empty = PlanCards::new(Vec::new(), DAY_FIVE, Language::English);
    assert_eq!(empty.to_string(), "No plans found.\n");

    let plan = create_test_plan(novel(), PlanStatus::Active);
    let cards = PlanCards::new(vec![&plan, &plan], DAY_FIVE, Language::English).to_string();
    assert_eq!(cards.matches("### Novel").count(), 2);
}

#[test]
fn test_dashboard_view() {
    let active = create_test_plan(novel(), PlanStatus::Active);
    let archived = create_test_plan(BookKind::FixedWork, PlanStatus::Archived);
    let stats = DashboardStats::from_plans([&active, &archived]);

    let view = DashboardView {
        user: "User",
        stats,
        active: vec![&active],
        completed: Vec::new(),
        archived: vec![&archived],
        today: DAY_FIVE,
        lang: Language::English,
    };
    let output = view.to_string();

    assert!(output.starts_with("# Dashboard\n"));
    assert!(output.contains("Welcome back, User"));
    assert!(output.contains("- **Active Plans**: 1"));
    assert!(output.contains("- **Total Participants**: 6"));
    assert!(output.contains("- **Average Progress**: 33%"));
    assert!(output.contains("## Archived Plans"));
    assert!(output.contains("### Quran Reading"));
    assert!(!output.contains("## Completed Plans"));
}

#[test]
fn test_dashboard_view_french_headings() {
    let view = DashboardView {
        user: "Amina",
        stats: DashboardStats::default(),
        active: Vec::new(),
        completed: Vec::new(),
        archived: Vec::new(),
        today: DAY_FIVE,
        lang: Language::French,
    };
    let output = view.to_string();

    assert!(output.starts_with("# Tableau de bord\n"));
    assert!(output.contains("Bienvenue, Amina"));
    assert!(output.contains("## Plans actifs"));
    assert!(output.contains("Aucun plan trouvé."));
}

#[test]
fn test_result_wrappers() {
    let plan = create_test_plan(novel(), PlanStatus::Active);

    let created = CreateResult::new(plan.clone()).to_string();
    assert!(created.starts_with("Created plan with ID: 4b8f1d9e-2c3a-4f5b-8d6e-7a9b0c1d2e3f"));
    assert!(created.contains("## Participants"));

    let archived = ArchiveResult::new(plan.clone())
        .in_language(Language::French)
        .to_string();
    assert!(archived.starts_with("Plan archivé: Novel"));

    let deleted = DeleteResult::new(plan.clone()).to_string();
    assert!(deleted.contains("Deleted plan: Novel"));
    assert!(deleted.contains("Removed 3 participants."));

    let b = plan.participants[1].id;
    let progress = ProgressResult::new(plan, b).to_string();
    assert!(progress.starts_with("Recorded progress for B: 100%"));
    assert!(progress.contains("Plan progress: 33%"));
    assert!(!progress.contains("Plan completed!"));
}
