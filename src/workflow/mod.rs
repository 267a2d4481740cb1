mod engine;
mod matching;
mod state;

pub use engine::{
    result_lines, Workflow, WorkflowData, MAX_ATTEMPTS_MESSAGE, NO_RECIPE_MESSAGE,
    RECIPE_INFO_MISSING_MESSAGE,
};
pub use matching::{is_supplied, missing_ingredients};
pub use state::AppState;
