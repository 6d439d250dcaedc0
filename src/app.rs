use crate::api::{Facet, MealDetail, MealSource, MealSummary};
use std::time::{Duration, Instant};

/// Which view is currently active.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum View {
    Browse,
    Detail,
}

/// Which tab is selected in the detail view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DetailTab {
    Ingredients,
    Instructions,
}

impl DetailTab {
    pub fn next(self) -> Self {
        match self {
            Self::Ingredients => Self::Instructions,
            Self::Instructions => Self::Ingredients,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            Self::Ingredients => Self::Instructions,
            Self::Instructions => Self::Ingredients,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Ingredients => "Ingredients",
            Self::Instructions => "Instructions",
        }
    }

    pub const ALL: [DetailTab; 2] = [Self::Ingredients, Self::Instructions];
}

/// Input mode for the search bar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputMode {
    Normal,
    Editing,
}

/// A remote operation requested by a key press. Key handling stays
/// synchronous; the event loop draws one frame with the loading flag set
/// and then executes the operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchOp {
    Search,
    Filter(Facet, String),
    Random,
    Lookup(String),
}

/// A dismissible error notice. Expires [`NOTICE_TTL`] after creation.
#[derive(Debug, Clone)]
pub struct Notice {
    pub text: String,
    pub created: Instant,
}

pub const NOTICE_TTL: Duration = Duration::from_secs(3);

/// Dropdown state for picking one facet option.
#[derive(Debug, Clone)]
pub struct FacetPicker {
    pub facet: Facet,
    pub query: String,
    pub selected: usize,
}

impl FacetPicker {
    pub fn new(facet: Facet) -> Self {
        Self {
            facet,
            query: String::new(),
            selected: 0,
        }
    }
}

pub const LIST_OVERHEAD: u16 = 12;

/// Main application state.
pub struct App<S> {
    pub api: S,
    pub should_quit: bool,
    pub view: View,
    pub show_help: bool,

    // Search bar state
    pub search_input: String,
    pub input_mode: InputMode,

    // Current result set and the visible page of it
    pub results: Vec<MealSummary>,
    pub results_label: String,
    pub page_items: Vec<MealSummary>, // Current visible page
    pub list_selected: usize,         // Index within visible page
    pub list_offset: usize,           // Offset into results
    pub page_size: usize,

    // Facet options loaded at startup
    pub categories: Vec<String>,
    pub areas: Vec<String>,
    pub ingredients: Vec<String>,
    pub picked_category: Option<String>,
    pub picked_area: Option<String>,
    pub picked_ingredient: Option<String>,
    pub picker: Option<FacetPicker>,

    // Detail view state
    pub detail: Option<MealDetail>,
    pub detail_tab: DetailTab,
    pub detail_scroll: u16,

    // Transient feedback
    pub loading: bool,
    pub notices: Vec<Notice>,
    pub status_msg: String,
}

impl<S> App<S> {
    pub fn new(api: S) -> Self {
        Self {
            api,
            should_quit: false,
            view: View::Browse,
            show_help: false,

            search_input: String::new(),
            input_mode: InputMode::Normal,

            results: Vec::new(),
            results_label: String::new(),
            page_items: Vec::new(),
            list_selected: 0,
            list_offset: 0,
            page_size: 20, // Initial default, will be updated on first render/resize

            categories: Vec::new(),
            areas: Vec::new(),
            ingredients: Vec::new(),
            picked_category: None,
            picked_area: None,
            picked_ingredient: None,
            picker: None,

            detail: None,
            detail_tab: DetailTab::Ingredients,
            detail_scroll: 0,

            loading: false,
            notices: Vec::new(),
            status_msg: "Loading filter options...".to_string(),
        }
    }

    /// Replace the result set and reset the visible page.
    pub fn set_results(&mut self, meals: Vec<MealSummary>, label: String) {
        self.results = meals;
        self.results_label = label;
        self.list_offset = 0;
        self.list_selected = 0;
        self.update_list_page();
    }

    /// Update the current page of visible items based on offset.
    pub fn update_list_page(&mut self) {
        let start = self.list_offset.min(self.results.len());
        let end = (start + self.page_size).min(self.results.len());
        self.page_items = self.results[start..end].to_vec();
        if self.list_selected >= self.page_items.len() {
            self.list_selected = self.page_items.len().saturating_sub(1);
        }
    }

    /// Update page size based on terminal height.
    pub fn update_page_size(&mut self, terminal_height: u16) {
        let new_size = terminal_height.saturating_sub(LIST_OVERHEAD) as usize;
        self.page_size = new_size.max(1);
        self.update_list_page();
    }

    /// Move selection down in the list.
    pub fn list_next(&mut self) {
        if self.page_items.is_empty() {
            return;
        }
        if self.list_selected + 1 < self.page_items.len() {
            self.list_selected += 1;
        } else {
            // Next page
            let new_offset = self.list_offset + self.page_size;
            if new_offset < self.results.len() {
                self.list_offset = new_offset;
                self.list_selected = 0;
                self.update_list_page();
            }
        }
    }

    /// Move selection up in the list.
    pub fn list_prev(&mut self) {
        if self.list_selected > 0 {
            self.list_selected -= 1;
        } else if self.list_offset > 0 {
            // Prev page
            self.list_offset = self.list_offset.saturating_sub(self.page_size);
            self.update_list_page();
            self.list_selected = self.page_items.len().saturating_sub(1);
        }
    }

    pub fn list_page_down(&mut self) {
        let new_offset = self.list_offset + self.page_size;
        if new_offset < self.results.len() {
            self.list_offset = new_offset;
            self.update_list_page();
            self.list_selected = 0;
        } else {
            // Go to end
            let last_page_start =
                (self.results.len().saturating_sub(1) / self.page_size) * self.page_size;
            self.list_offset = last_page_start;
            self.update_list_page();
            self.list_selected = self.page_items.len().saturating_sub(1);
        }
    }

    pub fn list_page_up(&mut self) {
        if self.list_offset > 0 {
            self.list_offset = self.list_offset.saturating_sub(self.page_size);
            self.update_list_page();
            self.list_selected = 0;
        } else {
            self.list_selected = 0;
        }
    }

    /// Fetch request for the selected card's full details.
    pub fn open_selected(&self) -> Option<FetchOp> {
        self.page_items
            .get(self.list_selected)
            .map(|meal| FetchOp::Lookup(meal.id.clone()))
    }

    /// Fetch request for the search bar's text. A blank input raises the
    /// notice without requesting anything, so the loading indicator only
    /// shows once validation passes.
    pub fn submit_search(&mut self) -> Option<FetchOp> {
        if self.search_input.trim().is_empty() {
            self.push_notice("Please enter a meal name!");
            return None;
        }
        Some(FetchOp::Search)
    }

    /// Loaded options for one facet's dropdown.
    pub fn facet_options(&self, facet: Facet) -> &[String] {
        match facet {
            Facet::Category => &self.categories,
            Facet::Area => &self.areas,
            Facet::Ingredient => &self.ingredients,
        }
    }

    /// Open the dropdown for `facet`. Does nothing when its option list
    /// failed to load at startup.
    pub fn open_picker(&mut self, facet: Facet) {
        if self.facet_options(facet).is_empty() {
            self.status_msg = format!("no {} options loaded", facet.label().to_lowercase());
            return;
        }
        self.picker = Some(FacetPicker::new(facet));
        self.status_msg.clear();
    }

    /// Options for the active picker, narrowed by its typed query.
    pub fn picker_options(&self) -> Vec<String> {
        let Some(picker) = &self.picker else {
            return Vec::new();
        };
        let all = self.facet_options(picker.facet);
        if picker.query.is_empty() {
            return all.to_vec();
        }
        let query = picker.query.to_lowercase();
        all.iter()
            .filter(|option| option.to_lowercase().contains(&query))
            .cloned()
            .collect()
    }

    pub fn picker_next(&mut self) {
        let len = self.picker_options().len();
        if let Some(picker) = &mut self.picker {
            if len > 0 && picker.selected + 1 < len {
                picker.selected += 1;
            }
        }
    }

    pub fn picker_prev(&mut self) {
        if let Some(picker) = &mut self.picker {
            if picker.selected > 0 {
                picker.selected -= 1;
            }
        }
    }

    pub fn picker_input(&mut self, c: char) {
        if let Some(picker) = &mut self.picker {
            picker.query.push(c);
            picker.selected = 0;
        }
    }

    pub fn picker_backspace(&mut self) {
        if let Some(picker) = &mut self.picker {
            picker.query.pop();
            picker.selected = 0;
        }
    }

    /// Close the picker, record the highlighted option as the facet's
    /// current value and return the filter fetch for it.
    pub fn apply_picker(&mut self) -> Option<FetchOp> {
        let options = self.picker_options();
        let picker = self.picker.take()?;
        let value = options.get(picker.selected).cloned()?;
        match picker.facet {
            Facet::Category => self.picked_category = Some(value.clone()),
            Facet::Area => self.picked_area = Some(value.clone()),
            Facet::Ingredient => self.picked_ingredient = Some(value.clone()),
        }
        Some(FetchOp::Filter(picker.facet, value))
    }

    /// Append a dismissible notice to the alert stack.
    pub fn push_notice(&mut self, text: impl Into<String>) {
        self.notices.push(Notice {
            text: text.into(),
            created: Instant::now(),
        });
    }

    /// Drop notices older than [`NOTICE_TTL`] as of `now`.
    pub fn prune_notices(&mut self, now: Instant) {
        self.notices
            .retain(|notice| now.duration_since(notice.created) < NOTICE_TTL);
    }

    /// Dismiss the oldest notice.
    pub fn dismiss_notice(&mut self) {
        if !self.notices.is_empty() {
            self.notices.remove(0);
        }
    }

    pub fn scroll_down(&mut self) {
        self.detail_scroll = self.detail_scroll.saturating_add(1);
    }

    pub fn scroll_up(&mut self) {
        self.detail_scroll = self.detail_scroll.saturating_sub(1);
    }

    pub fn scroll_page_down(&mut self) {
        self.detail_scroll = self.detail_scroll.saturating_add(20);
    }

    pub fn scroll_page_up(&mut self) {
        self.detail_scroll = self.detail_scroll.saturating_sub(20);
    }
}

impl<S: MealSource> App<S> {
    /// Initial data load: the three dropdown option lists, fetched
    /// concurrently. A failed list leaves that dropdown empty and raises
    /// a notice; the others still populate.
    pub async fn init(&mut self) {
        let (categories, areas, ingredients) = tokio::join!(
            self.api.list_categories(),
            self.api.list_areas(),
            self.api.list_ingredients(),
        );
        match categories {
            Ok(options) => self.categories = options,
            Err(err) => {
                eprintln!("category list failed: {err}");
                self.push_notice("Failed to load categories");
            }
        }
        match areas {
            Ok(options) => self.areas = options,
            Err(err) => {
                eprintln!("area list failed: {err}");
                self.push_notice("Failed to load areas");
            }
        }
        match ingredients {
            Ok(options) => self.ingredients = options,
            Err(err) => {
                eprintln!("ingredient list failed: {err}");
                self.push_notice("Failed to load ingredients");
            }
        }
        self.status_msg = format!(
            "{} categories, {} areas, {} ingredients loaded",
            self.categories.len(),
            self.areas.len(),
            self.ingredients.len()
        );
    }

    /// Run one remote operation to completion. The loading flag is
    /// cleared whatever the outcome.
    pub async fn execute(&mut self, op: FetchOp) {
        match op {
            FetchOp::Search => self.run_search().await,
            FetchOp::Filter(facet, value) => self.run_filter(facet, &value).await,
            FetchOp::Random => self.run_random().await,
            FetchOp::Lookup(id) => self.lookup_and_show(&id).await,
        }
        self.loading = false;
    }

    /// Search by name. An all-whitespace input aborts before any request
    /// and keeps the input; otherwise the input is cleared once the
    /// request settles. A miss leaves the previous results in place.
    pub async fn run_search(&mut self) {
        let name = self.search_input.trim().to_string();
        if name.is_empty() {
            self.push_notice("Please enter a meal name!");
            return;
        }
        match self.api.search_meals(&name).await {
            Ok(Some(meals)) if !meals.is_empty() => {
                self.status_msg = format!("{} meals found for \"{name}\"", meals.len());
                self.set_results(meals, format!("search \"{name}\""));
            }
            Ok(_) => self.push_notice("No meals found with that name."),
            Err(err) => {
                self.status_msg = format!("search failed: {err}");
                self.push_notice("Something went wrong!");
            }
        }
        self.search_input.clear();
    }

    /// Filter by one facet value. Unlike a search miss, a filter miss
    /// clears the results so the empty placeholder shows.
    pub async fn run_filter(&mut self, facet: Facet, value: &str) {
        let label = format!("{}: {value}", facet.label());
        match self.api.filter_meals(facet, value).await {
            Ok(Some(meals)) if !meals.is_empty() => {
                self.status_msg = format!("{} meals for {label}", meals.len());
                self.set_results(meals, label);
            }
            Ok(_) => {
                self.set_results(Vec::new(), label);
                self.push_notice(format!(
                    "No meals found for {} \"{value}\".",
                    facet.label().to_lowercase()
                ));
            }
            Err(err) => {
                self.status_msg = format!("filter failed: {err}");
                self.push_notice(format!(
                    "Something went wrong while filtering by {}!",
                    facet.label().to_lowercase()
                ));
            }
        }
    }

    /// Pick a random meal, then fetch its full details by id.
    pub async fn run_random(&mut self) {
        match self.api.random_meal().await {
            Ok(Some(meal)) => self.lookup_and_show(&meal.id).await,
            Ok(None) => self.push_notice("Meal details not found."),
            Err(err) => {
                self.status_msg = format!("random fetch failed: {err}");
                self.push_notice("Something went wrong while fetching a random meal!");
            }
        }
    }

    /// Fetch full details for `id` and switch to the detail view.
    pub async fn lookup_and_show(&mut self, id: &str) {
        match self.api.lookup_meal(id).await {
            Ok(Some(detail)) => {
                self.detail = Some(detail);
                self.detail_tab = DetailTab::Ingredients;
                self.detail_scroll = 0;
                self.view = View::Detail;
            }
            Ok(None) => self.push_notice("Meal details not found."),
            Err(err) => {
                self.status_msg = format!("lookup failed: {err}");
                self.push_notice("Something went wrong while fetching meal details!");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::ApiError;
    use std::cell::RefCell;

    #[derive(Default)]
    struct StubSource {
        calls: RefCell<Vec<String>>,
        search: Option<Vec<MealSummary>>,
        search_fails: bool,
        filter: Option<Vec<MealSummary>>,
        filter_fails: bool,
        lookup: Option<MealDetail>,
        lookup_fails: bool,
        random: Option<MealDetail>,
        random_fails: bool,
        categories: Vec<String>,
        categories_fail: bool,
        areas: Vec<String>,
        ingredients: Vec<String>,
    }

    impl MealSource for StubSource {
        async fn search_meals(&self, name: &str) -> Result<Option<Vec<MealSummary>>, ApiError> {
            self.calls.borrow_mut().push(format!("search:{name}"));
            if self.search_fails {
                return Err(ApiError::Status(500));
            }
            Ok(self.search.clone())
        }

        async fn filter_meals(
            &self,
            facet: Facet,
            value: &str,
        ) -> Result<Option<Vec<MealSummary>>, ApiError> {
            self.calls
                .borrow_mut()
                .push(format!("filter:{}:{value}", facet.query_key()));
            if self.filter_fails {
                return Err(ApiError::Status(500));
            }
            Ok(self.filter.clone())
        }

        async fn lookup_meal(&self, id: &str) -> Result<Option<MealDetail>, ApiError> {
            self.calls.borrow_mut().push(format!("lookup:{id}"));
            if self.lookup_fails {
                return Err(ApiError::Status(500));
            }
            Ok(self.lookup.clone())
        }

        async fn random_meal(&self) -> Result<Option<MealDetail>, ApiError> {
            self.calls.borrow_mut().push("random".to_string());
            if self.random_fails {
                return Err(ApiError::Status(500));
            }
            Ok(self.random.clone())
        }

        async fn list_categories(&self) -> Result<Vec<String>, ApiError> {
            self.calls.borrow_mut().push("list:c".to_string());
            if self.categories_fail {
                return Err(ApiError::Status(500));
            }
            Ok(self.categories.clone())
        }

        async fn list_areas(&self) -> Result<Vec<String>, ApiError> {
            self.calls.borrow_mut().push("list:a".to_string());
            Ok(self.areas.clone())
        }

        async fn list_ingredients(&self) -> Result<Vec<String>, ApiError> {
            self.calls.borrow_mut().push("list:i".to_string());
            Ok(self.ingredients.clone())
        }
    }

    fn summary(id: &str, name: &str) -> MealSummary {
        MealSummary {
            id: id.to_string(),
            name: name.to_string(),
            thumb: Some(format!("https://example.test/{id}.jpg")),
        }
    }

    fn detail_fixture(id: &str) -> MealDetail {
        serde_json::from_str(&format!(
            r#"{{"idMeal":"{id}","strMeal":"Spicy Arrabiata Penne",
                "strCategory":"Vegetarian","strArea":"Italian",
                "strInstructions":"Boil the pasta.",
                "strMealThumb":"https://example.test/{id}.jpg",
                "strIngredient1":"penne rigate","strMeasure1":"1 pound"}}"#
        ))
        .unwrap()
    }

    #[tokio::test]
    async fn blank_search_input_sends_no_request() {
        let mut app = App::new(StubSource::default());
        app.search_input = "   ".to_string();
        app.execute(FetchOp::Search).await;
        assert!(app.api.calls.borrow().is_empty());
        assert_eq!(app.notices.len(), 1);
        assert_eq!(app.notices[0].text, "Please enter a meal name!");
        // Input survives a validation abort.
        assert_eq!(app.search_input, "   ");
    }

    #[test]
    fn blank_submit_raises_notice_without_a_fetch() {
        let mut app = App::new(StubSource::default());
        app.search_input = "  ".to_string();
        assert_eq!(app.submit_search(), None);
        assert!(app.api.calls.borrow().is_empty());
        assert_eq!(app.notices[0].text, "Please enter a meal name!");
        assert_eq!(app.search_input, "  ");

        app.search_input = "beef".to_string();
        assert_eq!(app.submit_search(), Some(FetchOp::Search));
        assert_eq!(app.notices.len(), 1);
    }

    #[tokio::test]
    async fn search_trims_input_and_replaces_results() {
        let stub = StubSource {
            search: Some(vec![summary("1", "Arrabiata"), summary("2", "Penne")]),
            ..Default::default()
        };
        let mut app = App::new(stub);
        app.search_input = " arrabiata ".to_string();
        app.loading = true;
        app.execute(FetchOp::Search).await;
        assert_eq!(app.api.calls.borrow().as_slice(), ["search:arrabiata"]);
        assert_eq!(app.results.len(), 2);
        assert_eq!(app.page_items.len(), 2);
        assert_eq!(app.page_items[0].name, "Arrabiata");
        assert_eq!(app.list_selected, 0);
        assert!(app.search_input.is_empty());
        assert!(!app.loading);
    }

    #[tokio::test]
    async fn search_miss_keeps_previous_results() {
        let mut app = App::new(StubSource::default());
        app.set_results(vec![summary("1", "Old")], "search \"old\"".to_string());
        app.search_input = "nothing".to_string();
        app.execute(FetchOp::Search).await;
        assert_eq!(app.results.len(), 1);
        assert_eq!(app.results[0].name, "Old");
        assert_eq!(app.notices[0].text, "No meals found with that name.");
        assert!(app.search_input.is_empty());
    }

    #[tokio::test]
    async fn search_error_raises_generic_notice() {
        let stub = StubSource {
            search_fails: true,
            ..Default::default()
        };
        let mut app = App::new(stub);
        app.search_input = "beef".to_string();
        app.loading = true;
        app.execute(FetchOp::Search).await;
        assert_eq!(app.notices[0].text, "Something went wrong!");
        assert!(app.search_input.is_empty());
        assert!(!app.loading);
    }

    #[tokio::test]
    async fn filter_miss_clears_results_and_explains() {
        let mut app = App::new(StubSource::default());
        app.set_results(vec![summary("1", "Old")], "search \"old\"".to_string());
        app.execute(FetchOp::Filter(Facet::Area, "Narnia".to_string()))
            .await;
        assert!(app.results.is_empty());
        assert!(app.page_items.is_empty());
        assert_eq!(app.results_label, "Area: Narnia");
        assert_eq!(app.notices[0].text, "No meals found for area \"Narnia\".");
    }

    #[tokio::test]
    async fn filter_error_names_the_facet() {
        let stub = StubSource {
            filter_fails: true,
            ..Default::default()
        };
        let mut app = App::new(stub);
        app.execute(FetchOp::Filter(Facet::Ingredient, "Garlic".to_string()))
            .await;
        assert_eq!(
            app.notices[0].text,
            "Something went wrong while filtering by ingredient!"
        );
        assert_eq!(app.api.calls.borrow().as_slice(), ["filter:i:Garlic"]);
    }

    #[tokio::test]
    async fn random_opens_detail_through_lookup() {
        let stub = StubSource {
            random: Some(detail_fixture("52771")),
            lookup: Some(detail_fixture("52771")),
            ..Default::default()
        };
        let mut app = App::new(stub);
        app.execute(FetchOp::Random).await;
        assert_eq!(
            app.api.calls.borrow().as_slice(),
            ["random", "lookup:52771"]
        );
        assert_eq!(app.view, View::Detail);
        assert_eq!(app.detail.as_ref().unwrap().name, "Spicy Arrabiata Penne");
        assert_eq!(app.detail_tab, DetailTab::Ingredients);
        assert_eq!(app.detail_scroll, 0);
    }

    #[tokio::test]
    async fn lookup_miss_stays_in_browse() {
        let mut app = App::new(StubSource::default());
        app.execute(FetchOp::Lookup("999".to_string())).await;
        assert_eq!(app.view, View::Browse);
        assert!(app.detail.is_none());
        assert_eq!(app.notices[0].text, "Meal details not found.");
    }

    #[tokio::test]
    async fn lookup_error_raises_notice_and_stays_in_browse() {
        let stub = StubSource {
            lookup_fails: true,
            ..Default::default()
        };
        let mut app = App::new(stub);
        app.loading = true;
        app.execute(FetchOp::Lookup("52771".to_string())).await;
        assert_eq!(
            app.notices[0].text,
            "Something went wrong while fetching meal details!"
        );
        assert_eq!(app.view, View::Browse);
        assert!(app.detail.is_none());
        assert!(!app.loading);
    }

    #[tokio::test]
    async fn random_error_raises_notice_without_a_lookup() {
        let stub = StubSource {
            random_fails: true,
            ..Default::default()
        };
        let mut app = App::new(stub);
        app.loading = true;
        app.execute(FetchOp::Random).await;
        assert_eq!(
            app.notices[0].text,
            "Something went wrong while fetching a random meal!"
        );
        assert_eq!(app.api.calls.borrow().as_slice(), ["random"]);
        assert_eq!(app.view, View::Browse);
        assert!(app.detail.is_none());
        assert!(!app.loading);
    }

    #[tokio::test]
    async fn init_partial_failure_populates_the_rest() {
        let stub = StubSource {
            categories_fail: true,
            areas: vec!["Italian".to_string()],
            ingredients: vec!["Garlic".to_string()],
            ..Default::default()
        };
        let mut app = App::new(stub);
        app.init().await;
        assert!(app.categories.is_empty());
        assert_eq!(app.areas, ["Italian"]);
        assert_eq!(app.ingredients, ["Garlic"]);
        assert_eq!(app.notices.len(), 1);
        assert_eq!(app.notices[0].text, "Failed to load categories");
        assert_eq!(
            app.status_msg,
            "0 categories, 1 areas, 1 ingredients loaded"
        );
    }

    #[test]
    fn notices_expire_after_ttl_and_dismiss_oldest_first() {
        let mut app = App::new(StubSource::default());
        app.push_notice("one");
        app.push_notice("two");
        let created = app.notices[0].created;
        app.prune_notices(created + Duration::from_millis(2900));
        assert_eq!(app.notices.len(), 2);

        app.dismiss_notice();
        assert_eq!(app.notices.len(), 1);
        assert_eq!(app.notices[0].text, "two");

        app.prune_notices(created + Duration::from_millis(3100));
        assert!(app.notices.is_empty());
    }

    #[test]
    fn pagination_walks_pages() {
        let mut app = App::new(StubSource::default());
        let meals = (0..45)
            .map(|i| summary(&i.to_string(), &format!("Meal {i}")))
            .collect();
        app.set_results(meals, "search \"m\"".to_string());
        app.update_page_size(32); // 20 rows after chrome
        assert_eq!(app.page_size, 20);
        assert_eq!(app.page_items.len(), 20);

        for _ in 0..20 {
            app.list_next();
        }
        assert_eq!(app.list_offset, 20);
        assert_eq!(app.list_selected, 0);

        app.list_prev();
        assert_eq!(app.list_offset, 0);
        assert_eq!(app.list_selected, 19);

        app.list_page_down();
        app.list_page_down();
        assert_eq!(app.list_offset, 40);
        assert_eq!(app.page_items.len(), 5);

        // Beyond the last page just goes to the end.
        app.list_page_down();
        assert_eq!(app.list_offset, 40);
        assert_eq!(app.list_selected, 4);

        app.list_page_up();
        assert_eq!(app.list_offset, 20);
        assert_eq!(app.list_selected, 0);
    }

    #[test]
    fn open_selected_targets_the_highlighted_card() {
        let mut app = App::new(StubSource::default());
        app.set_results(
            vec![summary("10", "A"), summary("11", "B")],
            "search \"x\"".to_string(),
        );
        app.list_next();
        assert_eq!(app.open_selected(), Some(FetchOp::Lookup("11".to_string())));
    }

    #[test]
    fn picker_narrows_and_applies() {
        let mut app = App::new(StubSource::default());
        app.categories = vec!["Beef", "Chicken", "Dessert", "Seafood"]
            .into_iter()
            .map(String::from)
            .collect();
        app.open_picker(Facet::Category);
        assert!(app.picker.is_some());
        app.picker_input('e');
        app.picker_input('a');
        assert_eq!(app.picker_options(), ["Seafood"]);

        let op = app.apply_picker();
        assert_eq!(
            op,
            Some(FetchOp::Filter(Facet::Category, "Seafood".to_string()))
        );
        assert_eq!(app.picked_category.as_deref(), Some("Seafood"));
        assert!(app.picker.is_none());
    }

    #[test]
    fn picker_with_no_match_applies_nothing() {
        let mut app = App::new(StubSource::default());
        app.areas = vec!["Italian".to_string()];
        app.open_picker(Facet::Area);
        app.picker_input('z');
        assert!(app.picker_options().is_empty());
        assert_eq!(app.apply_picker(), None);
        assert!(app.picker.is_none());
        assert!(app.picked_area.is_none());
    }

    #[test]
    fn picker_needs_loaded_options() {
        let mut app = App::new(StubSource::default());
        app.open_picker(Facet::Ingredient);
        assert!(app.picker.is_none());
        assert!(app.status_msg.contains("ingredient"));
    }

    #[test]
    fn detail_tabs_cycle_in_both_directions() {
        assert_eq!(DetailTab::Ingredients.next(), DetailTab::Instructions);
        assert_eq!(DetailTab::Instructions.next(), DetailTab::Ingredients);
        assert_eq!(DetailTab::Instructions.prev(), DetailTab::Ingredients);
        assert_eq!(DetailTab::Ingredients.prev(), DetailTab::Instructions);
    }
}
