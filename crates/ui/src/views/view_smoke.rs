use std::sync::Arc;

use hub_core::model::Animal;
use storage::repository::{AnimalRepository, NewAnimalRecord, Storage, StorageError};

use super::lost_animals::BoardForm;
use super::test_harness::{ViewKind, drive_dom, setup_view_harness, setup_view_harness_with_store};
use crate::vm::QuizIntent;

fn fill_report_form(form: &BoardForm, name: &str, location: &str, contact: &str) {
    let mut show = form.show;
    show.set(true);
    let mut name_field = form.name;
    name_field.set(name.to_string());
    let mut location_field = form.location;
    location_field.set(location.to_string());
    let mut contact_field = form.contact;
    contact_field.set(contact.to_string());
}

#[tokio::test(flavor = "current_thread")]
async fn home_view_smoke_renders_hub_cards() {
    let mut harness = setup_view_harness(ViewKind::Home);
    harness.rebuild();

    let html = harness.render();
    for expected in [
        "OUROBORUS AI",
        "Driving Test",
        "Lost Animals",
        "Explore Services",
        "Start Simulation",
    ] {
        assert!(html.contains(expected), "missing {expected} in {html}");
    }
}

#[tokio::test(flavor = "current_thread")]
async fn services_view_smoke_renders_offerings() {
    let mut harness = setup_view_harness(ViewKind::Services);
    harness.rebuild();

    let html = harness.render();
    for expected in [
        "Digital Solutions",
        "Web Design",
        "Digital Marketing",
        "Get a Quote",
    ] {
        assert!(html.contains(expected), "missing {expected} in {html}");
    }
}

#[tokio::test(flavor = "current_thread")]
async fn driving_test_smoke_renders_menu() {
    let mut harness = setup_view_harness(ViewKind::DrivingTest);
    harness.rebuild();

    let html = harness.render();
    for expected in [
        "Driving Test Simulator",
        "Study Mode",
        "Exam Mode",
        "35 random questions, simulated test",
    ] {
        assert!(html.contains(expected), "missing {expected} in {html}");
    }
}

#[tokio::test(flavor = "current_thread")]
async fn driving_test_smoke_exam_draws_thirty_five() {
    let mut harness = setup_view_harness(ViewKind::DrivingTest);
    harness.rebuild();

    let handles = harness.quiz_handles.clone().expect("quiz handles");
    handles.dispatch().call(QuizIntent::StartExam);
    drive_dom(&mut harness.dom);

    let html = harness.render();
    for expected in ["Question 1 / 35", "Exam Mode", "Finish Test"] {
        assert!(html.contains(expected), "missing {expected} in {html}");
    }
}

#[tokio::test(flavor = "current_thread")]
async fn driving_test_smoke_unanswered_walk_fails() {
    let mut harness = setup_view_harness(ViewKind::DrivingTest);
    harness.rebuild();

    let handles = harness.quiz_handles.clone().expect("quiz handles");
    handles.dispatch().call(QuizIntent::StartStudy);
    drive_dom(&mut harness.dom);

    let total = handles
        .session()
        .read()
        .round()
        .map(|round| round.len())
        .expect("round in progress");
    for _ in 0..total {
        handles.dispatch().call(QuizIntent::Next);
        drive_dom(&mut harness.dom);
    }

    let html = harness.render();
    for expected in ["Test Completed!", "Your Score:", "FAILED (Needs 33)"] {
        assert!(html.contains(expected), "missing {expected} in {html}");
    }
}

#[tokio::test(flavor = "current_thread")]
async fn driving_test_smoke_paints_selected_option() {
    let mut harness = setup_view_harness(ViewKind::DrivingTest);
    harness.rebuild();

    let handles = harness.quiz_handles.clone().expect("quiz handles");
    handles.dispatch().call(QuizIntent::StartStudy);
    drive_dom(&mut harness.dom);

    let (question_id, label) = handles
        .session()
        .read()
        .round()
        .and_then(|round| {
            let question = round.current()?;
            let label = question.choices().first()?.label.clone();
            Some((question.id(), label))
        })
        .expect("current question");
    handles
        .dispatch()
        .call(QuizIntent::Select(question_id, label));
    drive_dom(&mut harness.dom);

    let html = harness.render();
    assert!(
        html.contains("option option--selected"),
        "missing painted selection in {html}"
    );
}

#[tokio::test(flavor = "current_thread")]
async fn driving_test_smoke_exit_returns_to_menu() {
    let mut harness = setup_view_harness(ViewKind::DrivingTest);
    harness.rebuild();

    let handles = harness.quiz_handles.clone().expect("quiz handles");
    handles.dispatch().call(QuizIntent::StartExam);
    drive_dom(&mut harness.dom);
    handles.dispatch().call(QuizIntent::ExitToMenu);
    drive_dom(&mut harness.dom);

    let html = harness.render();
    assert!(
        html.contains("Driving Test Simulator"),
        "missing menu heading in {html}"
    );
    assert!(
        !html.contains("Question 1 /"),
        "round still on screen in {html}"
    );
}

#[tokio::test(flavor = "current_thread")]
async fn lost_animals_smoke_renders_demo_board_newest_first() {
    let mut harness = setup_view_harness(ViewKind::LostAnimals);
    harness.rebuild();
    harness.drive_async().await;

    let html = harness.render();
    for expected in [
        "Report Lost Pet",
        "Bobby",
        "Luna",
        "Rex",
        "status-badge--lost",
        "status-badge--found",
    ] {
        assert!(html.contains(expected), "missing {expected} in {html}");
    }
    let bobby = html.find("Bobby").expect("Bobby rendered");
    let luna = html.find("Luna").expect("Luna rendered");
    let rex = html.find("Rex").expect("Rex rendered");
    assert!(bobby < luna && luna < rex, "cards out of order in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn lost_animals_smoke_surfaces_listing_error() {
    let store = Storage {
        animals: Arc::new(FailingRepo),
    };
    let mut harness = setup_view_harness_with_store(ViewKind::LostAnimals, store);
    harness.rebuild();
    harness.drive_async().await;

    let html = harness.render();
    for expected in ["connection error: fail", "Retry"] {
        assert!(html.contains(expected), "missing {expected} in {html}");
    }
}

#[tokio::test(flavor = "current_thread")]
async fn lost_animals_smoke_submit_failure_keeps_input() {
    let store = Storage {
        animals: Arc::new(InsertFailsRepo),
    };
    let mut harness = setup_view_harness_with_store(ViewKind::LostAnimals, store);
    harness.rebuild();
    harness.drive_async().await;

    let handles = harness.board_handles.clone().expect("board handles");
    let form = handles.form();
    fill_report_form(&form, "Nala", "Pine Street", "555-0100");
    let mut description = form.description;
    description.set("Grey tabby, red collar".to_string());
    drive_dom(&mut harness.dom);

    handles.submit().call(());
    drive_dom(&mut harness.dom);
    harness.drive_async().await;

    let html = harness.render();
    for expected in [
        "Error reporting pet:",
        "service unavailable",
        "Nala",
        "Pine Street",
    ] {
        assert!(html.contains(expected), "missing {expected} in {html}");
    }
}

#[tokio::test(flavor = "current_thread")]
async fn lost_animals_smoke_submit_prepends_stored_report() {
    let mut harness = setup_view_harness(ViewKind::LostAnimals);
    harness.rebuild();
    harness.drive_async().await;

    let handles = harness.board_handles.clone().expect("board handles");
    let form = handles.form();
    fill_report_form(&form, "Nala", "Pine Street", "555-0100");
    drive_dom(&mut harness.dom);

    handles.submit().call(());
    drive_dom(&mut harness.dom);
    harness.drive_async().await;

    let html = harness.render();
    for expected in ["Alert posted.", "Nala", "2023-11-14"] {
        assert!(html.contains(expected), "missing {expected} in {html}");
    }
    let nala = html.find("Nala").expect("Nala rendered");
    let bobby = html.find("Bobby").expect("Bobby rendered");
    assert!(nala < bobby, "new report not at the top in {html}");

    let listed = harness
        .store
        .animals
        .list_animals()
        .await
        .expect("list animals");
    assert_eq!(listed.len(), 4);
    assert_eq!(listed[0].name, "Nala");
}

struct FailingRepo;

#[async_trait::async_trait]
impl AnimalRepository for FailingRepo {
    async fn list_animals(&self) -> Result<Vec<Animal>, StorageError> {
        Err(StorageError::Connection("fail".to_string()))
    }

    async fn insert_animal(&self, _record: NewAnimalRecord) -> Result<Animal, StorageError> {
        Err(StorageError::Connection("fail".to_string()))
    }
}

struct InsertFailsRepo;

#[async_trait::async_trait]
impl AnimalRepository for InsertFailsRepo {
    async fn list_animals(&self) -> Result<Vec<Animal>, StorageError> {
        Ok(Vec::new())
    }

    async fn insert_animal(&self, _record: NewAnimalRecord) -> Result<Animal, StorageError> {
        Err(StorageError::Remote {
            status: 503,
            message: "service unavailable".to_string(),
        })
    }
}
