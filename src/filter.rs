// Filter flyout - staged edits of the search filters
//
// The flyout works on a draft copy of the committed filters. Nothing it does
// touches the search until `apply()` hands the draft back to the caller.
// Whenever the committed filters change underneath it, the draft is reset to
// match, discarding unapplied edits.

use crate::model::Filters;
use std::cmp::Ordering;

pub const AGE_ERROR: &str = "Min age can not larger than max age";

/// Focusable parts of the flyout, in tab order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FlyoutField {
    #[default]
    Breeds,
    ZipCodes,
    MinAge,
    MaxAge,
    Reset,
    Cancel,
    Apply,
}

impl FlyoutField {
    const ORDER: [FlyoutField; 7] = [
        FlyoutField::Breeds,
        FlyoutField::ZipCodes,
        FlyoutField::MinAge,
        FlyoutField::MaxAge,
        FlyoutField::Reset,
        FlyoutField::Cancel,
        FlyoutField::Apply,
    ];

    fn index(self) -> usize {
        Self::ORDER.iter().position(|f| *f == self).unwrap_or(0)
    }

    pub fn next(self) -> Self {
        Self::ORDER[(self.index() + 1) % Self::ORDER.len()]
    }

    pub fn prev(self) -> Self {
        Self::ORDER[(self.index() + Self::ORDER.len() - 1) % Self::ORDER.len()]
    }
}

/// Parse the comma separated zip code input. Empty input is an empty list.
pub fn parse_zip_codes(input: &str) -> Vec<String> {
    if input.is_empty() {
        Vec::new()
    } else {
        input.split(',').map(str::to_string).collect()
    }
}

/// Compare two typed ages. Numbers compare numerically, anything else
/// falls back to comparing the text as typed.
fn age_cmp(a: &str, b: &str) -> Ordering {
    match (a.parse::<u64>(), b.parse::<u64>()) {
        (Ok(a), Ok(b)) => a.cmp(&b),
        _ => a.cmp(b),
    }
}

/// Shared error for both age fields, if min > max
pub fn age_error(min: &str, max: &str) -> Option<&'static str> {
    if min.is_empty() || max.is_empty() {
        return None;
    }
    (age_cmp(min, max) == Ordering::Greater).then_some(AGE_ERROR)
}

/// Result of a key action that may close the flyout
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FlyoutAction {
    /// Keep the flyout open
    None,
    /// Close without touching the committed filters
    Cancel,
    /// Close and commit these filters
    Apply(Filters),
}

#[derive(Debug, Default)]
pub struct FilterFlyout {
    pub open: bool,
    /// All breeds offered by the service
    pub breed_options: Vec<String>,
    /// Draft selection, in the order the user picked them
    pub breeds: Vec<String>,
    pub zip_codes: Vec<String>,
    pub min_age: String,
    pub max_age: String,
    pub age_error: Option<&'static str>,
    pub focus: FlyoutField,
    /// Cursor in the breed option list
    pub breed_cursor: usize,
    /// Committed filters the draft was last reset from
    committed: Filters,
}

impl FilterFlyout {
    pub fn new() -> Self {
        Self::default()
    }

    fn reset_from(&mut self, committed: &Filters) {
        self.breeds = committed.breeds.clone();
        self.zip_codes = committed.zip_codes.clone();
        self.min_age = committed.age_min.clone();
        self.max_age = committed.age_max.clone();
        self.age_error = age_error(&self.min_age, &self.max_age);
        self.committed = committed.clone();
    }

    /// Show the flyout with a fresh draft of the committed filters
    pub fn open(&mut self, committed: &Filters) {
        self.reset_from(committed);
        self.focus = FlyoutField::default();
        self.breed_cursor = 0;
        self.open = true;
    }

    /// Re-sync with the parent's filters; unapplied edits are lost if they changed
    pub fn sync(&mut self, committed: &Filters) {
        if &self.committed != committed {
            self.reset_from(committed);
        }
    }

    pub fn set_breed_options(&mut self, options: Vec<String>) {
        self.breed_options = options;
        self.breed_cursor = self.breed_cursor.min(self.breed_options.len().saturating_sub(1));
    }

    pub fn toggle_breed(&mut self, breed: &str) {
        if let Some(pos) = self.breeds.iter().position(|b| b == breed) {
            self.breeds.remove(pos);
        } else {
            self.breeds.push(breed.to_string());
        }
    }

    pub fn toggle_breed_at_cursor(&mut self) {
        if let Some(breed) = self.breed_options.get(self.breed_cursor).cloned() {
            self.toggle_breed(&breed);
        }
    }

    pub fn is_breed_selected(&self, breed: &str) -> bool {
        self.breeds.iter().any(|b| b == breed)
    }

    pub fn breed_cursor_up(&mut self) {
        self.breed_cursor = self.breed_cursor.saturating_sub(1);
    }

    pub fn breed_cursor_down(&mut self) {
        if self.breed_cursor + 1 < self.breed_options.len() {
            self.breed_cursor += 1;
        }
    }

    /// Zip codes as shown in the text input
    pub fn zip_text(&self) -> String {
        self.zip_codes.join(",")
    }

    pub fn set_zip_text(&mut self, text: &str) {
        self.zip_codes = parse_zip_codes(text);
    }

    pub fn set_min_age(&mut self, value: &str) {
        self.min_age = value.to_string();
        self.age_error = age_error(&self.min_age, &self.max_age);
    }

    pub fn set_max_age(&mut self, value: &str) {
        self.max_age = value.to_string();
        self.age_error = age_error(&self.min_age, &self.max_age);
    }

    /// Type into the focused text field. Age fields only take digits.
    pub fn insert_char(&mut self, c: char) {
        match self.focus {
            FlyoutField::ZipCodes => {
                let mut text = self.zip_text();
                text.push(c);
                self.set_zip_text(&text);
            }
            FlyoutField::MinAge if c.is_ascii_digit() => {
                let value = format!("{}{}", self.min_age, c);
                self.set_min_age(&value);
            }
            FlyoutField::MaxAge if c.is_ascii_digit() => {
                let value = format!("{}{}", self.max_age, c);
                self.set_max_age(&value);
            }
            _ => {}
        }
    }

    pub fn backspace(&mut self) {
        match self.focus {
            FlyoutField::ZipCodes => {
                let mut text = self.zip_text();
                text.pop();
                self.set_zip_text(&text);
            }
            FlyoutField::MinAge => {
                let mut value = self.min_age.clone();
                value.pop();
                self.set_min_age(&value);
            }
            FlyoutField::MaxAge => {
                let mut value = self.max_age.clone();
                value.pop();
                self.set_max_age(&value);
            }
            _ => {}
        }
    }

    /// Clear every draft field; stays open and applies nothing
    pub fn reset(&mut self) {
        self.breeds.clear();
        self.zip_codes.clear();
        self.min_age.clear();
        self.max_age.clear();
        self.age_error = None;
    }

    pub fn cancel(&mut self) -> FlyoutAction {
        self.open = false;
        FlyoutAction::Cancel
    }

    /// Close and hand the draft back as the new committed filters
    pub fn apply(&mut self) -> FlyoutAction {
        self.open = false;
        FlyoutAction::Apply(Filters {
            breeds: self.breeds.clone(),
            zip_codes: self.zip_codes.clone(),
            age_min: self.min_age.clone(),
            age_max: self.max_age.clone(),
        })
    }

    /// Activate the focused control (Enter / Space)
    pub fn activate(&mut self) -> FlyoutAction {
        match self.focus {
            FlyoutField::Breeds => {
                self.toggle_breed_at_cursor();
                FlyoutAction::None
            }
            FlyoutField::Reset => {
                self.reset();
                FlyoutAction::None
            }
            FlyoutField::Cancel => self.cancel(),
            FlyoutField::ZipCodes
            | FlyoutField::MinAge
            | FlyoutField::MaxAge
            | FlyoutField::Apply => self.apply(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn committed() -> Filters {
        Filters {
            breeds: vec!["Akita".into()],
            zip_codes: vec!["10001".into()],
            age_min: "1".into(),
            age_max: "9".into(),
        }
    }

    #[test]
    fn test_zip_parsing() {
        assert!(parse_zip_codes("").is_empty());
        assert_eq!(parse_zip_codes("a,b,c"), vec!["a", "b", "c"]);
        assert_eq!(parse_zip_codes("a,"), vec!["a", ""]);
    }

    #[test]
    fn test_typing_zip_codes() {
        let mut flyout = FilterFlyout::new();
        flyout.open(&Filters::default());
        flyout.focus = FlyoutField::ZipCodes;
        for c in "123,45".chars() {
            flyout.insert_char(c);
        }
        assert_eq!(flyout.zip_codes, vec!["123", "45"]);

        for _ in 0..6 {
            flyout.backspace();
        }
        assert!(flyout.zip_codes.is_empty());
    }

    #[test]
    fn test_age_error_shared_and_clears() {
        let mut flyout = FilterFlyout::new();
        flyout.open(&Filters::default());

        flyout.set_max_age("5");
        assert_eq!(flyout.age_error, None);

        flyout.set_min_age("7");
        assert_eq!(flyout.age_error, Some(AGE_ERROR));

        flyout.set_max_age("10");
        assert_eq!(flyout.age_error, None);

        flyout.set_max_age("");
        flyout.set_min_age("12");
        assert_eq!(flyout.age_error, None);
    }

    #[test]
    fn test_age_fields_take_digits_only() {
        let mut flyout = FilterFlyout::new();
        flyout.open(&Filters::default());
        flyout.focus = FlyoutField::MinAge;
        for c in "1a2".chars() {
            flyout.insert_char(c);
        }
        assert_eq!(flyout.min_age, "12");
    }

    #[test]
    fn test_apply_returns_draft() {
        let mut flyout = FilterFlyout::new();
        flyout.open(&committed());
        flyout.toggle_breed("Boxer");
        flyout.toggle_breed("Akita");

        let action = flyout.apply();
        assert!(!flyout.open);
        assert_eq!(
            action,
            FlyoutAction::Apply(Filters {
                breeds: vec!["Boxer".into()],
                ..committed()
            })
        );
    }

    #[test]
    fn test_cancel_discards_draft() {
        let mut flyout = FilterFlyout::new();
        flyout.open(&committed());
        flyout.set_min_age("4");
        assert_eq!(flyout.cancel(), FlyoutAction::Cancel);

        flyout.open(&committed());
        assert_eq!(flyout.min_age, "1");
    }

    #[test]
    fn test_reset_clears_without_closing() {
        let mut flyout = FilterFlyout::new();
        flyout.open(&committed());
        flyout.reset();
        assert!(flyout.open);
        assert!(flyout.breeds.is_empty());
        assert!(flyout.zip_codes.is_empty());
        assert!(flyout.min_age.is_empty());
        assert!(flyout.max_age.is_empty());
    }

    #[test]
    fn test_sync_wipes_edits_only_on_change() {
        let mut flyout = FilterFlyout::new();
        flyout.open(&committed());
        flyout.set_max_age("3");

        flyout.sync(&committed());
        assert_eq!(flyout.max_age, "3");

        let changed = Filters {
            age_max: "8".into(),
            ..committed()
        };
        flyout.sync(&changed);
        assert_eq!(flyout.max_age, "8");
    }

    #[test]
    fn test_breed_cursor() {
        let mut flyout = FilterFlyout::new();
        flyout.set_breed_options(vec!["Akita".into(), "Boxer".into()]);
        flyout.open(&Filters::default());
        flyout.breed_cursor_down();
        flyout.breed_cursor_down();
        flyout.activate();
        assert!(flyout.is_breed_selected("Boxer"));
        flyout.breed_cursor_up();
        assert_eq!(flyout.breed_cursor, 0);
    }
}
