mod animal_vm;
mod quiz_vm;
mod time_fmt;

pub use animal_vm::{AnimalCardVm, map_animal_cards, view_error_from_board};
pub use quiz_vm::{
    OptionRowVm, OptionTone, QuizIntent, answer_reveal, map_option_rows, mode_label,
    progress_label, score_class, verdict_label,
};
