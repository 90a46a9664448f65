//! Command execution handlers
//!
//! Session-based architecture: every handler loads the application state,
//! applies one synchronous mutation or query, persists the keys it touched,
//! and renders. There is no background work and no partially-applied state.

use crate::application::cli::{Commands, KindArg, PantryAction, ShopAction};
use crate::application::session::{LiveSession, Session};
use crate::application::state::{AppState, ShopItem};
use crate::application::CliConfig;
use crate::morsel::matcher::{FinderFilters, rank};
use crate::morsel::ratings::MAX_COMMENTS;
use crate::morsel::search::{BrowseFilters, browse};
use crate::morsel::seed::{DEFAULT_COCKTAIL_COUNT, DEFAULT_FOOD_COUNT};
use crate::morsel::store::{Recipe, RecipeDraft, parse_comma_tags, MAX_MOODS};
use crate::morsel::units::format_ingredients;
use crate::primitives::{AgeAnswer, RecipeKind, Units};
use anyhow::Result;

/// Ingredient lines pushed onto the shopping list per recipe
const SHOP_LINES_PER_RECIPE: usize = 40;

/// Missing ingredients shown per ranked result
const MISSING_PREVIEW: usize = 6;

/// Comments shown on a recipe card
const COMMENT_PREVIEW: usize = 6;

/// Execute CLI commands using the session-based architecture
pub fn execute_command(config: CliConfig) -> Result<()> {
    let session = LiveSession::new(config.app_config)?;

    let command = match config.command {
        Some(cmd) => cmd,
        None => {
            session
                .display()
                .status()
                .message("morsel - recipe catalogue and meal planning");
            session
                .display()
                .status()
                .subtle("Run 'morsel --help' for usage information");
            return Ok(());
        }
    };

    execute_command_with_session(command, &session)
}

/// Execute a specific command with a provided session (for testing)
pub fn execute_command_with_session(command: Commands, session: &dyn Session) -> Result<()> {
    match command {
        Commands::List {
            query,
            kind,
            mood,
            allergen,
            limit,
        } => handle_list(session, query, kind, mood, allergen, limit),
        Commands::Show { id } => handle_show(session, &id),
        Commands::Add {
            name,
            kind,
            level,
            moods,
            allergens,
            serves,
            time,
            history,
            ingredients,
            method,
            variations,
        } => handle_add(
            session,
            AddInput {
                name,
                kind,
                level,
                moods,
                allergens,
                serves,
                time,
                history,
                ingredients,
                method,
                variations,
            },
        ),
        Commands::Pantry { action } => handle_pantry(session, action),
        Commands::Find {
            tolerance,
            kind,
            allergen,
        } => handle_find(session, tolerance, kind, allergen),
        Commands::Fav { id } => handle_fav(session, &id),
        Commands::Book => handle_book(session),
        Commands::Rate { id, stars } => handle_rate(session, &id, stars),
        Commands::Comment { id, text } => handle_comment(session, &id, &text.join(" ")),
        Commands::Shop { action } => handle_shop(session, action),
        Commands::Seed { food, cocktails } => handle_seed(session, food, cocktails),
        Commands::Units { value } => handle_units(session, value),
        Commands::Age { answer } => handle_age(session, answer),
        Commands::Version => handle_version(session),
    }
}

/// Raw add-recipe input from flags, before interactive fill-in
struct AddInput {
    name: Option<String>,
    kind: KindArg,
    level: Option<u8>,
    moods: Option<String>,
    allergens: Option<String>,
    serves: Option<String>,
    time: Option<String>,
    history: Option<String>,
    ingredients: Vec<String>,
    method: Option<String>,
    variations: Option<String>,
}

fn handle_list(
    session: &dyn Session,
    query: Option<String>,
    kind: KindArg,
    mood: Option<String>,
    allergen: Option<String>,
    limit: usize,
) -> Result<()> {
    let mut state = AppState::load(session.storage())?;

    // Only an explicit cocktails view sits behind the age gate, matching
    // the gate-on-the-cocktails-tab behavior.
    if kind == KindArg::Cocktail && !pass_age_gate(session, &mut state)? {
        return Ok(());
    }

    let filters = BrowseFilters {
        query,
        kind: kind.to_kind(),
        mood,
        allergen,
    };
    let found = browse(state.store.all(), &filters);

    if found.is_empty() {
        session
            .display()
            .status()
            .info("No recipes match. Try fewer filters, or reseed with 'morsel seed'.");
        return Ok(());
    }

    session
        .display()
        .status()
        .emphasis(&format!("{} recipe(s)", found.len()));
    for recipe in found.iter().take(limit) {
        session
            .display()
            .status()
            .message(&summary_line(recipe, &state));
    }
    if found.len() > limit {
        session.display().status().subtle(&format!(
            "... and {} more (raise --limit to see them)",
            found.len() - limit
        ));
    }

    Ok(())
}

fn handle_show(session: &dyn Session, id: &str) -> Result<()> {
    let mut state = AppState::load(session.storage())?;

    let Some(kind) = state.store.get(id).map(|r| r.kind) else {
        session.display().status().error("no such recipe", id);
        return Ok(());
    };

    if kind == RecipeKind::Cocktail && !pass_age_gate(session, &mut state)? {
        return Ok(());
    }

    if let Some(recipe) = state.store.get(id) {
        render_card(session, recipe, &state);
    }
    Ok(())
}

fn render_card(session: &dyn Session, recipe: &Recipe, state: &AppState) {
    let status = session.display().status();

    status.section(&recipe.name);
    status.message(&format!(
        "{} | level {}/5 | time {} | serves {} | {}",
        recipe.kind, recipe.level, recipe.time, recipe.serves, recipe.source
    ));
    if !recipe.moods.is_empty() {
        status.message(&format!("moods: {}", recipe.moods.join(", ")));
    }
    if !recipe.allergens.is_empty() {
        status.warning(&format!("allergens: {}", recipe.allergens.join(", ")));
    }
    if state.favs.contains(&recipe.id) {
        status.info("in your book");
    }

    status.section("History");
    status.message(if recipe.history.is_empty() {
        "No story yet. Add one in your own version."
    } else {
        &recipe.history
    });

    status.section("Ingredients");
    status.message(&format_ingredients(&recipe.ingredients, state.units));

    status.section("Method");
    status.message(&recipe.method);

    status.section("Variations");
    status.message(if recipe.variations.is_empty() {
        "Try: swap ingredients, change spice, or make it cheaper."
    } else {
        &recipe.variations
    });

    status.section("Ratings");
    status.message(&rating_label(state, &recipe.id));
    match state.comments.get(&recipe.id) {
        None => status.subtle("No comments yet."),
        Some(log) if log.is_empty() => status.subtle("No comments yet."),
        Some(log) => {
            for comment in log.iter().take(COMMENT_PREVIEW) {
                status.message(&format!(
                    "- {} ({})",
                    comment.text,
                    comment.posted_at.format("%Y-%m-%d")
                ));
            }
        }
    }
}

fn handle_add(session: &dyn Session, mut input: AddInput) -> Result<()> {
    // Fill the required fields interactively when a user is attached.
    if session.prompt().is_interactive() {
        if input.name.as_deref().is_none_or(str::is_empty) {
            input.name = Some(session.prompt().text_input("Recipe name", None)?);
        }
        if input.ingredients.is_empty() {
            input.ingredients = session.prompt().line_series("Ingredient")?;
        }
        if input.method.as_deref().is_none_or(str::is_empty) {
            input.method = Some(session.prompt().text_input("Method", None)?);
        }
    }

    let draft = RecipeDraft {
        id: String::new(),
        kind: Some(input.kind.to_kind().unwrap_or(RecipeKind::Food)),
        name: input.name,
        moods: input.moods.map(|m| parse_comma_tags(&m, MAX_MOODS)),
        level: input.level,
        allergens: input.allergens.map(|a| parse_comma_tags(&a, 10)),
        serves: input.serves,
        time: input.time,
        history: input.history,
        ingredients: if input.ingredients.is_empty() {
            None
        } else {
            Some(input.ingredients.join("\n"))
        },
        method: input.method,
        variations: input.variations,
        source: None,
    };

    let mut state = AppState::load(session.storage())?;
    match state.add_user_recipe(draft) {
        Ok(id) => {
            state.save_my_recipes(session.storage())?;
            let name = state
                .store
                .get(&id)
                .map(|r| r.name.clone())
                .unwrap_or_default();
            session.display().status().success("saved", &name);
            session
                .display()
                .status()
                .subtle(&format!("view it with 'morsel show {id}'"));
        }
        Err(err) => {
            session.display().status().error("not saved", &err.to_string());
        }
    }

    Ok(())
}

fn handle_pantry(session: &dyn Session, action: PantryAction) -> Result<()> {
    let mut state = AppState::load(session.storage())?;

    match action {
        PantryAction::Add { items } => {
            let mut added = 0;
            for item in &items {
                if state.pantry.add(item) {
                    added += 1;
                }
            }
            state.save_pantry(session.storage())?;
            session
                .display()
                .status()
                .success("pantry", &format!("{added} added, {} total", state.pantry.len()));
        }
        PantryAction::Remove { items } => {
            let mut removed = 0;
            for item in &items {
                if state.pantry.remove(item) {
                    removed += 1;
                }
            }
            state.save_pantry(session.storage())?;
            session
                .display()
                .status()
                .success("pantry", &format!("{removed} removed, {} left", state.pantry.len()));
        }
        PantryAction::Clear => {
            state.pantry.clear();
            state.save_pantry(session.storage())?;
            session.display().status().success("pantry", "cleared");
        }
        PantryAction::List => {
            if state.pantry.is_empty() {
                session
                    .display()
                    .status()
                    .info("Pantry is empty. Add with 'morsel pantry add <item>'.");
            } else {
                let items: Vec<String> = state.pantry.iter().map(str::to_string).collect();
                session.display().status().list(&items);
            }
        }
    }

    Ok(())
}

fn handle_find(
    session: &dyn Session,
    tolerance: u8,
    kind: KindArg,
    allergen: Option<String>,
) -> Result<()> {
    let state = AppState::load(session.storage())?;

    let filters = FinderFilters {
        kind: kind.to_kind(),
        allergen,
    };

    let Some(ranked) = rank(
        &state.pantry,
        state.store.all(),
        tolerance,
        &filters,
    ) else {
        session
            .display()
            .status()
            .info("Pantry is empty. Add what you have with 'morsel pantry add <item>'.");
        return Ok(());
    };

    if ranked.is_empty() {
        session.display().status().info(&format!(
            "Nothing makeable within {tolerance}% missing. Raise --tolerance or stock up."
        ));
        return Ok(());
    }

    session.display().status().emphasis(&format!(
        "{} match(es) at {tolerance}% tolerance",
        ranked.len()
    ));

    for entry in &ranked {
        let badge = if entry.is_perfect() {
            "perfect match".to_string()
        } else {
            format!(
                "{}/{} match",
                entry.matched_count(),
                entry.matched_count() + entry.missing_count()
            )
        };
        session
            .display()
            .status()
            .message(&format!("[{badge}] {}", summary_line(entry.recipe, &state)));

        if !entry.missing.is_empty() {
            let mut preview = entry
                .missing
                .iter()
                .take(MISSING_PREVIEW)
                .cloned()
                .collect::<Vec<_>>()
                .join(", ");
            if entry.missing.len() > MISSING_PREVIEW {
                preview.push_str(", ...");
            }
            session
                .display()
                .status()
                .subtle(&format!("  missing: {preview}"));
        }
    }

    Ok(())
}

fn handle_fav(session: &dyn Session, id: &str) -> Result<()> {
    let mut state = AppState::load(session.storage())?;

    if state.store.get(id).is_none() {
        session.display().status().error("no such recipe", id);
        return Ok(());
    }

    let now_fav = state.toggle_fav(id);
    state.save_favs(session.storage())?;

    if now_fav {
        session.display().status().success("added to your book", id);
    } else {
        session.display().status().success("removed from your book", id);
    }

    Ok(())
}

fn handle_book(session: &dyn Session) -> Result<()> {
    let state = AppState::load(session.storage())?;
    let status = session.display().status();

    status.section("Favourites");
    let favs: Vec<&Recipe> = state
        .store
        .all()
        .filter(|r| state.favs.contains(&r.id))
        .collect();
    if favs.is_empty() {
        status.subtle("Nothing yet. Toggle one with 'morsel fav <id>'.");
    } else {
        for recipe in favs {
            status.message(&summary_line(recipe, &state));
        }
    }

    status.section("My recipes");
    if state.store.mine().is_empty() {
        status.subtle("Nothing yet. Save one with 'morsel add'.");
    } else {
        for recipe in state.store.mine() {
            status.message(&summary_line(recipe, &state));
        }
    }

    Ok(())
}

fn handle_rate(session: &dyn Session, id: &str, stars: u8) -> Result<()> {
    let mut state = AppState::load(session.storage())?;

    if state.store.get(id).is_none() {
        session.display().status().error("no such recipe", id);
        return Ok(());
    }

    state
        .ratings
        .entry(id.to_string())
        .or_default()
        .record(stars)?;
    state.save_ratings(session.storage())?;

    session
        .display()
        .status()
        .success("rated", &rating_label(&state, id));
    Ok(())
}

fn handle_comment(session: &dyn Session, id: &str, text: &str) -> Result<()> {
    let mut state = AppState::load(session.storage())?;

    if state.store.get(id).is_none() {
        session.display().status().error("no such recipe", id);
        return Ok(());
    }

    let posted = state.comments.entry(id.to_string()).or_default().post(text);
    if !posted {
        session
            .display()
            .status()
            .error("empty comment", "nothing to post");
        return Ok(());
    }

    state.save_comments(session.storage())?;
    let count = state.comments.get(id).map_or(0, |log| log.len());
    session.display().status().success(
        "comment posted",
        &format!("{count}/{MAX_COMMENTS} kept"),
    );
    Ok(())
}

fn handle_shop(session: &dyn Session, action: ShopAction) -> Result<()> {
    let mut state = AppState::load(session.storage())?;

    match action {
        ShopAction::Add { text } => {
            let text = text.join(" ").trim().to_string();
            if text.is_empty() {
                session.display().status().error("empty item", "nothing to add");
                return Ok(());
            }
            state.shop.insert(0, ShopItem { text, done: false });
            state.save_shop(session.storage())?;
            session
                .display()
                .status()
                .success("shopping", &format!("{} item(s)", state.shop.len()));
        }
        ShopAction::Done { index } => {
            let Some(item) = index
                .checked_sub(1)
                .and_then(|i| state.shop.get_mut(i))
            else {
                session
                    .display()
                    .status()
                    .error("no such item", &index.to_string());
                return Ok(());
            };
            item.done = !item.done;
            let label = if item.done { "done" } else { "not done" };
            let text = item.text.clone();
            state.save_shop(session.storage())?;
            session.display().status().success(label, &text);
        }
        ShopAction::Remove { index } => {
            let Some(i) = index.checked_sub(1).filter(|i| *i < state.shop.len()) else {
                session
                    .display()
                    .status()
                    .error("no such item", &index.to_string());
                return Ok(());
            };
            let removed = state.shop.remove(i);
            state.save_shop(session.storage())?;
            session.display().status().success("removed", &removed.text);
        }
        ShopAction::Clear => {
            state.shop.clear();
            state.save_shop(session.storage())?;
            session.display().status().success("shopping", "cleared");
        }
        ShopAction::List => {
            if state.shop.is_empty() {
                session
                    .display()
                    .status()
                    .info("Shopping list is empty. Add with 'morsel shop add <item>'.");
            } else {
                for (i, item) in state.shop.iter().enumerate() {
                    let mark = if item.done { "x" } else { " " };
                    session
                        .display()
                        .status()
                        .message(&format!("{:>3}. [{mark}] {}", i + 1, item.text));
                }
            }
        }
        ShopAction::Ingredients { id } => {
            let Some(recipe) = state.store.get(&id) else {
                session.display().status().error("no such recipe", &id);
                return Ok(());
            };

            let lines: Vec<String> = recipe
                .ingredients
                .lines()
                .map(str::trim)
                .filter(|l| !l.is_empty())
                .take(SHOP_LINES_PER_RECIPE)
                .map(str::to_string)
                .collect();

            // Prepend while preserving the recipe's line order.
            for line in lines.iter().rev() {
                state.shop.insert(
                    0,
                    ShopItem {
                        text: line.clone(),
                        done: false,
                    },
                );
            }
            state.save_shop(session.storage())?;
            session.display().status().success(
                "shopping",
                &format!("added {} ingredient line(s)", lines.len()),
            );
        }
    }

    Ok(())
}

fn handle_seed(session: &dyn Session, food: Option<usize>, cocktails: Option<usize>) -> Result<()> {
    let mut state = AppState::load(session.storage())?;

    let food = food.unwrap_or(DEFAULT_FOOD_COUNT);
    let cocktails = cocktails.unwrap_or(DEFAULT_COCKTAIL_COUNT);
    state.reseed(food, cocktails);
    state.save_catalogue(session.storage())?;

    session.display().status().success(
        "seeded",
        &format!(
            "{food} food + {cocktails} cocktail recipes ({} of yours kept)",
            state.store.mine().len()
        ),
    );
    Ok(())
}

fn handle_units(session: &dyn Session, value: Option<Units>) -> Result<()> {
    let mut state = AppState::load(session.storage())?;

    match value {
        None => {
            session
                .display()
                .status()
                .message(&format!("units: {}", state.units));
        }
        Some(units) => {
            state.units = units;
            state.save_units(session.storage())?;
            session
                .display()
                .status()
                .success("units", &units.to_string());
        }
    }
    Ok(())
}

fn handle_age(session: &dyn Session, answer: Option<AgeAnswer>) -> Result<()> {
    let mut state = AppState::load(session.storage())?;

    match answer {
        None => {
            let label = state
                .age
                .map_or("unanswered".to_string(), |a| a.to_string());
            session.display().status().message(&format!("age gate: {label}"));
        }
        Some(answer) => {
            state.age = Some(answer);
            state.save_age(session.storage())?;
            match answer {
                AgeAnswer::Yes => session.display().status().success("cocktails unlocked", ""),
                AgeAnswer::No => session.display().status().success("cocktails locked", ""),
            }
        }
    }
    Ok(())
}

fn handle_version(session: &dyn Session) -> Result<()> {
    let status = session.display().status();
    status.emphasis(&format!("morsel {}", env!("CARGO_PKG_VERSION")));
    status.message("A pocket recipe book: browse, match your pantry, plan the shop");
    Ok(())
}

/// Gate cocktail views on the stored age answer, asking once when possible
fn pass_age_gate(session: &dyn Session, state: &mut AppState) -> Result<bool> {
    match state.age {
        Some(AgeAnswer::Yes) => Ok(true),
        Some(AgeAnswer::No) => {
            session.display().status().warning("Cocktails are locked");
            session
                .display()
                .status()
                .subtle("Change your answer with 'morsel age yes'");
            Ok(false)
        }
        None => {
            if !session.prompt().is_interactive() {
                session
                    .display()
                    .status()
                    .info("Cocktails are age-gated. Run 'morsel age yes' to unlock.");
                return Ok(false);
            }

            let of_age = session
                .prompt()
                .confirm("Cocktails include alcohol. Are you 18 or older?", false)?;
            state.age = Some(if of_age { AgeAnswer::Yes } else { AgeAnswer::No });
            state.save_age(session.storage())?;

            if !of_age {
                session.display().status().warning("Cocktails locked");
            }
            Ok(of_age)
        }
    }
}

fn rating_label(state: &AppState, id: &str) -> String {
    match state.average_rating(id) {
        Some(avg) => format!("{avg:.1} stars ({})", state.ratings_count(id)),
        None => "unrated".to_string(),
    }
}

fn summary_line(recipe: &Recipe, state: &AppState) -> String {
    format!(
        "{:<18} {} [{}] lvl {}/5, {}, serves {}, {}",
        recipe.id,
        recipe.name,
        recipe.kind,
        recipe.level,
        recipe.time,
        recipe.serves,
        rating_label(state, &recipe.id)
    )
}

#[cfg(test)]
mod tests {
    include!("commands.test.rs");
}
