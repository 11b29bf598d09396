use std::sync::Arc;

use dioxus::core::NoOpMutations;
use dioxus::prelude::*;
use dioxus_router::{Routable, Router};
use hub_core::time::fixed_clock;
use services::{PetBoardService, QuestionBank, QuizService};
use storage::repository::Storage;

use crate::context::{UiApp, build_app_context};
use crate::views::driving_test::QuizTestHandles;
use crate::views::lost_animals::BoardTestHandles;
use crate::views::{DrivingTestView, HomeView, LostAnimalsView, ServicesView};

#[derive(Clone)]
struct TestApp {
    quiz: Arc<QuizService>,
    pet_board: Arc<PetBoardService>,
}

impl UiApp for TestApp {
    fn quiz(&self) -> Arc<QuizService> {
        Arc::clone(&self.quiz)
    }

    fn pet_board(&self) -> Arc<PetBoardService> {
        Arc::clone(&self.pet_board)
    }
}

#[derive(Clone, Copy, PartialEq, Eq)]
pub enum ViewKind {
    Home,
    DrivingTest,
    LostAnimals,
    Services,
}

#[derive(Props, Clone)]
struct ViewHarnessProps {
    app: Arc<TestApp>,
    view: ViewKind,
    quiz_handles: Option<QuizTestHandles>,
    board_handles: Option<BoardTestHandles>,
}

impl PartialEq for ViewHarnessProps {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

impl Eq for ViewHarnessProps {}

#[component]
fn ViewRouterHarness(props: ViewHarnessProps) -> Element {
    let app: Arc<dyn UiApp> = props.app.clone();
    use_context_provider(|| build_app_context(&app));
    use_context_provider(|| props.view);
    if let Some(handles) = props.quiz_handles.clone() {
        use_context_provider(|| handles);
    }
    if let Some(handles) = props.board_handles.clone() {
        use_context_provider(|| handles);
    }
    rsx! { Router::<TestRoute> {} }
}

#[derive(Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum TestRoute {
    #[route("/")]
    Root {},
}

#[component]
fn Root() -> Element {
    let view = use_context::<ViewKind>();
    match view {
        ViewKind::Home => rsx! { HomeView {} },
        ViewKind::DrivingTest => rsx! { DrivingTestView {} },
        ViewKind::LostAnimals => rsx! { LostAnimalsView {} },
        ViewKind::Services => rsx! { ServicesView {} },
    }
}

pub struct ViewHarness {
    pub dom: VirtualDom,
    pub store: Storage,
    pub quiz_handles: Option<QuizTestHandles>,
    pub board_handles: Option<BoardTestHandles>,
}

impl ViewHarness {
    pub fn rebuild(&mut self) {
        self.dom.rebuild_in_place();
        drive_dom(&mut self.dom);
    }

    pub async fn drive_async(&mut self) {
        let _ = tokio::time::timeout(
            std::time::Duration::from_millis(50),
            self.dom.wait_for_work(),
        )
        .await;
        self.dom.render_immediate(&mut NoOpMutations);
        self.dom.process_events();
    }

    pub fn render(&self) -> String {
        dioxus_ssr::render(&self.dom)
    }
}

pub fn drive_dom(dom: &mut VirtualDom) {
    dom.process_events();
    dom.render_immediate(&mut NoOpMutations);
    dom.process_events();
}

pub fn setup_view_harness(view: ViewKind) -> ViewHarness {
    setup_view_harness_with_store(view, Storage::in_memory_demo())
}

pub fn setup_view_harness_with_store(view: ViewKind, store: Storage) -> ViewHarness {
    let bank = QuestionBank::load_bundled().expect("load bundled question bank");
    let quiz = Arc::new(QuizService::new(bank));
    let pet_board = Arc::new(PetBoardService::new(
        Arc::clone(&store.animals),
        fixed_clock(),
    ));

    let quiz_handles = match view {
        ViewKind::DrivingTest => Some(QuizTestHandles::default()),
        _ => None,
    };
    let board_handles = match view {
        ViewKind::LostAnimals => Some(BoardTestHandles::default()),
        _ => None,
    };

    let app = Arc::new(TestApp { quiz, pet_board });

    let dom = VirtualDom::new_with_props(
        ViewRouterHarness,
        ViewHarnessProps {
            app,
            view,
            quiz_handles: quiz_handles.clone(),
            board_handles: board_handles.clone(),
        },
    );

    ViewHarness {
        dom,
        store,
        quiz_handles,
        board_handles,
    }
}
