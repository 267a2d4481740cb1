use crate::error::FinderError;

/// Every step of the ingredient-to-recipe workflow
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum AppState {
    Error = 0,
    Finished = 1,
    EnterIngredient = 2,
    SpellCheck = 3,
    SpellCheckSuggestions = 4,
    SearchSorting = 5,
    Search = 6,
    GetRecipe = 7,
    DisplayResults = 8,
}

impl AppState {
    pub const ALL: [AppState; 9] = [
        AppState::Error,
        AppState::Finished,
        AppState::EnterIngredient,
        AppState::SpellCheck,
        AppState::SpellCheckSuggestions,
        AppState::SearchSorting,
        AppState::Search,
        AppState::GetRecipe,
        AppState::DisplayResults,
    ];

    pub fn code(self) -> u8 {
        self as u8
    }

    pub fn is_terminal(self) -> bool {
        self == AppState::Finished
    }
}

impl TryFrom<u8> for AppState {
    type Error = FinderError;

    fn try_from(code: u8) -> Result<Self, FinderError> {
        AppState::ALL
            .into_iter()
            .find(|state| state.code() == code)
            .ok_or(FinderError::UnknownState(code))
    }
}
