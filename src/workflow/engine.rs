use crate::api::RecipeApi;
use crate::console::Console;
use crate::error::FinderError;
use crate::model::{top_recipe_id, RecipeResult, SortPreference};
use crate::retry::{RetryBudget, RetryOutcome, RetryPolicy};
use crate::spellcheck::SpellChecker;
use crate::suggestions::{expand, word_alternatives};
use crate::workflow::matching::missing_ingredients;
use crate::workflow::AppState;
use log::{debug, info, warn};
use std::time::Duration;

const INGREDIENT_PROMPT: &str = "Enter single ingredient (leave blank if done): ";
const SELECTION_PROMPT: &str = "Enter selection: ";

pub const NO_RECIPE_MESSAGE: &str =
    "No recipe returned, you must have had some interesting ingredients";
pub const RECIPE_INFO_MISSING_MESSAGE: &str =
    "The recipe information did not get returned for some reason";
pub const MAX_ATTEMPTS_MESSAGE: &str = "Maximum API attempts exceeded";

/// Everything one workflow run knows, mutated only by the handlers
#[derive(Debug, Clone)]
pub struct WorkflowData {
    pub state: AppState,
    /// Accepted ingredients, lowercase, in entry order
    pub ingredients: Vec<String>,
    /// Words of the ingredient currently being checked
    pub pending_tokens: Vec<String>,
    /// Whole-ingredient spelling candidates for the pending tokens
    pub suggestions: Vec<String>,
    pub sort: Option<SortPreference>,
    pub budget: RetryBudget,
    pub recipe_id: Option<String>,
    pub recipe: Option<RecipeResult>,
    pub error_message: Option<String>,
}

impl WorkflowData {
    pub fn new(budget: RetryBudget) -> Self {
        WorkflowData {
            state: AppState::EnterIngredient,
            ingredients: Vec::new(),
            pending_tokens: Vec::new(),
            suggestions: Vec::new(),
            sort: None,
            budget,
            recipe_id: None,
            recipe: None,
            error_message: None,
        }
    }
}

/// Runs one state handler and returns the next state
type Handler<C, S, A> = fn(&mut Workflow<C, S, A>) -> Result<AppState, FinderError>;

/// State machine driving a run from the first ingredient prompt to the
/// missing-ingredient report.
///
/// Each call to [`Workflow::advance`] runs exactly one state's handler.
pub struct Workflow<C, S, A> {
    console: C,
    spell_checker: S,
    api: A,
    retry: RetryPolicy,
    data: WorkflowData,
}

impl<C, S, A> Workflow<C, S, A>
where
    C: Console,
    S: SpellChecker,
    A: RecipeApi,
{
    pub fn new(console: C, spell_checker: S, api: A, retry: RetryPolicy) -> Self {
        let data = WorkflowData::new(retry.budget());
        Workflow {
            console,
            spell_checker,
            api,
            retry,
            data,
        }
    }

    pub fn current_state(&self) -> AppState {
        self.data.state
    }

    pub fn data(&self) -> &WorkflowData {
        &self.data
    }

    pub fn ingredients(&self) -> &[String] {
        &self.data.ingredients
    }

    pub fn console(&self) -> &C {
        &self.console
    }

    /// Move to the state with the given numeric code
    pub fn enter_state_code(&mut self, code: u8) -> Result<(), FinderError> {
        self.data.state = AppState::try_from(code)?;
        Ok(())
    }

    /// Run the current state's handler.
    ///
    /// Returns `Ok(false)` once the workflow has reached `Finished`; further
    /// calls do nothing. An `Err` is fatal for the run.
    pub fn advance(&mut self) -> Result<bool, FinderError> {
        let state = self.data.state;
        if state.is_terminal() {
            return Ok(false);
        }

        let handler = Self::handler_for(state).ok_or(FinderError::UnhandledState(state))?;
        let next = handler(self)?;
        if next != state {
            debug!("{:?} -> {:?}", state, next);
        }
        self.data.state = next;
        Ok(!next.is_terminal())
    }

    /// Advance until the workflow finishes
    pub fn run(&mut self) -> Result<(), FinderError> {
        while self.advance()? {}
        Ok(())
    }

    fn handler_for(state: AppState) -> Option<Handler<C, S, A>> {
        let handler: Handler<C, S, A> = match state {
            AppState::Error => Self::on_error,
            AppState::EnterIngredient => Self::enter_ingredient,
            AppState::SpellCheck => Self::spell_check,
            AppState::SpellCheckSuggestions => Self::spell_check_suggestions,
            AppState::SearchSorting => Self::search_sorting,
            AppState::Search => Self::search,
            AppState::GetRecipe => Self::get_recipe,
            AppState::DisplayResults => Self::display_results,
            AppState::Finished => return None,
        };
        Some(handler)
    }

    fn fail(&mut self, message: &str) -> AppState {
        self.data.error_message = Some(message.to_string());
        AppState::Error
    }

    /// Prompt for a menu choice in `1..=max`; `None` after an invalid answer
    fn read_selection(&mut self, max: usize) -> Result<Option<usize>, FinderError> {
        let answer = self.console.read_line(SELECTION_PROMPT)?;
        let answer = answer.trim();
        if answer.is_empty() || !answer.chars().all(|c| c.is_ascii_digit()) {
            self.console.print_line("Invalid selection, must be a number");
            return Ok(None);
        }

        match answer.parse::<usize>() {
            Ok(selection) if (1..=max).contains(&selection) => Ok(Some(selection)),
            _ => {
                self.console
                    .print_line(&format!("Invalid selection, must be between 1 and {}", max));
                Ok(None)
            }
        }
    }

    fn enter_ingredient(&mut self) -> Result<AppState, FinderError> {
        let line = self.console.read_line(INGREDIENT_PROMPT)?;
        self.data.pending_tokens = line.split_whitespace().map(str::to_string).collect();

        if self.data.pending_tokens.is_empty() {
            return Ok(AppState::SearchSorting);
        }
        let all_words = self
            .data
            .pending_tokens
            .iter()
            .all(|token| token.chars().all(char::is_alphabetic));
        if all_words {
            return Ok(AppState::SpellCheck);
        }

        self.console.print_line("Invalid input");
        Ok(AppState::EnterIngredient)
    }

    fn spell_check(&mut self) -> Result<AppState, FinderError> {
        let alternatives: Vec<Vec<String>> = self
            .data
            .pending_tokens
            .iter()
            .map(|word| word_alternatives(word, self.spell_checker.check(word)))
            .collect();
        self.data.suggestions = expand(&alternatives);

        if let [only] = self.data.suggestions.as_slice() {
            info!("Accepted ingredient '{}'", only);
            self.data.ingredients.push(only.clone());
            return Ok(AppState::EnterIngredient);
        }
        Ok(AppState::SpellCheckSuggestions)
    }

    fn spell_check_suggestions(&mut self) -> Result<AppState, FinderError> {
        self.console
            .print_line("Not sure if you spelled the ingredient correctly? Choose from below:");
        for (i, suggestion) in self.data.suggestions.iter().enumerate() {
            self.console.print_line(&format!("{}. {}", i + 1, suggestion));
        }
        let reenter = self.data.suggestions.len() + 1;
        self.console
            .print_line(&format!("{}. Reenter ingredient", reenter));

        let Some(selection) = self.read_selection(reenter)? else {
            return Ok(AppState::SpellCheckSuggestions);
        };
        if selection != reenter {
            let chosen = self.data.suggestions[selection - 1].clone();
            info!("Accepted ingredient '{}'", chosen);
            self.data.ingredients.push(chosen);
        }
        Ok(AppState::EnterIngredient)
    }

    fn search_sorting(&mut self) -> Result<AppState, FinderError> {
        self.console
            .print_line("Would you like to find the best recipe by:");
        self.console.print_line("1. Rating");
        self.console.print_line("2. Trendingness");

        let sort = match self.read_selection(2)? {
            Some(1) => SortPreference::ByRating,
            Some(_) => SortPreference::ByTrending,
            None => return Ok(AppState::SearchSorting),
        };
        self.data.sort = Some(sort);
        self.data.budget.reset();
        Ok(AppState::Search)
    }

    fn search(&mut self) -> Result<AppState, FinderError> {
        let query = self.data.ingredients.join(",");
        // Only reachable through SearchSorting, which always chooses
        let sort = self.data.sort.unwrap_or(SortPreference::ByRating);

        let outcome = self.retry.run(
            "API search",
            &mut self.data.budget,
            || self.api.search(&query, sort, None),
            |payload| Some(top_recipe_id(payload)),
            |response, delay| {
                self.console
                    .print_line(&retry_notice("API Search", response.status, delay))
            },
        );

        match outcome {
            RetryOutcome::Success(Some(recipe_id)) => {
                info!("Best recipe for '{}' is {}", query, recipe_id);
                self.data.recipe_id = Some(recipe_id);
                self.data.budget.reset();
                Ok(AppState::GetRecipe)
            }
            RetryOutcome::Success(None) => Ok(self.fail(NO_RECIPE_MESSAGE)),
            RetryOutcome::Exhausted {
                attempts,
                last_status,
            } => {
                warn!(
                    "Search for '{}' gave up after {} attempts, last status {}",
                    query, attempts, last_status
                );
                Ok(self.fail(MAX_ATTEMPTS_MESSAGE))
            }
        }
    }

    fn get_recipe(&mut self) -> Result<AppState, FinderError> {
        let Some(recipe_id) = self.data.recipe_id.clone() else {
            return Ok(self.fail(NO_RECIPE_MESSAGE));
        };

        let outcome = self.retry.run(
            "API get recipe",
            &mut self.data.budget,
            || self.api.get_recipe(&recipe_id),
            |payload| Some(RecipeResult::from_detail(&recipe_id, payload)),
            |response, delay| {
                self.console
                    .print_line(&retry_notice("API Get Recipe", response.status, delay))
            },
        );

        match outcome {
            RetryOutcome::Success(Some(recipe)) => {
                self.data.recipe = Some(recipe);
                Ok(AppState::DisplayResults)
            }
            RetryOutcome::Success(None) => Ok(self.fail(RECIPE_INFO_MISSING_MESSAGE)),
            RetryOutcome::Exhausted {
                attempts,
                last_status,
            } => {
                warn!(
                    "Recipe {} unavailable after {} attempts, last status {}",
                    recipe_id, attempts, last_status
                );
                Ok(self.fail(MAX_ATTEMPTS_MESSAGE))
            }
        }
    }

    fn display_results(&mut self) -> Result<AppState, FinderError> {
        let lines = match &self.data.recipe {
            Some(recipe) => result_lines(recipe, &self.data.ingredients),
            None => return Ok(self.fail(RECIPE_INFO_MISSING_MESSAGE)),
        };

        for line in lines {
            self.console.print_line(&line);
        }
        Ok(AppState::Finished)
    }

    fn on_error(&mut self) -> Result<AppState, FinderError> {
        let message = self.data.error_message.take().unwrap_or_default();
        self.console.print_line(&format!("Error: {}", message));
        Ok(AppState::Finished)
    }
}

/// Line shown to the user before an API call is retried
fn retry_notice(operation: &str, status: i32, delay: Duration) -> String {
    format!(
        "{} Failed, status: {}, retrying in {} seconds",
        operation,
        status,
        delay.as_secs_f64()
    )
}

/// The final report: recipe, supplied ingredients and what is missing
pub fn result_lines(recipe: &RecipeResult, supplied: &[String]) -> Vec<String> {
    let mut lines = vec![
        format!("Recipe Title: {}", recipe.title),
        format!("Food2Fork URL: {}", recipe.url),
        "Supplied ingredients:".to_string(),
    ];
    if supplied.is_empty() {
        lines.push("None".to_string());
    } else {
        lines.extend(supplied.iter().cloned());
    }

    lines.push(String::new());
    lines.push("Recipe ingredients that weren't supplied:".to_string());
    let missing = missing_ingredients(&recipe.ingredients, supplied);
    if missing.is_empty() {
        lines.push("None".to_string());
    } else {
        lines.extend(missing.into_iter().map(str::to_string));
    }
    lines
}
