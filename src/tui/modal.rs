// Modal overlays
//
// Self-contained dialogs that handle their own input and return actions.
// App just holds Option<Modal>; input routing acts on the returned ModalAction.

use crate::model::Dog;
use crossterm::event::KeyCode;

/// Actions returned by modal input handling
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModalAction {
    /// Input consumed, no state change needed
    None,
    Close,
    /// Copy the matched dog's image URL
    CopyImageUrl,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Modal {
    /// Keyboard shortcuts
    Help,
    /// "We found your matched dog!"
    MatchedDog(Dog),
}

impl Modal {
    pub fn handle_input(&self, key: KeyCode) -> ModalAction {
        match self {
            Modal::Help => match key {
                KeyCode::Esc | KeyCode::Char('?') | KeyCode::Char('q') => ModalAction::Close,
                _ => ModalAction::None,
            },
            Modal::MatchedDog(_) => match key {
                KeyCode::Esc | KeyCode::Enter | KeyCode::Char('q') => ModalAction::Close,
                KeyCode::Char('y') => ModalAction::CopyImageUrl,
                _ => ModalAction::None,
            },
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Modal::Help => " Keyboard Shortcuts ",
            Modal::MatchedDog(_) => " We found your matched dog! ",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::fake::dog;

    #[test]
    fn test_help_closes_on_toggle_key() {
        assert_eq!(Modal::Help.handle_input(KeyCode::Char('?')), ModalAction::Close);
        assert_eq!(Modal::Help.handle_input(KeyCode::Char('y')), ModalAction::None);
    }

    #[test]
    fn test_matched_dog_copy_and_close() {
        let modal = Modal::MatchedDog(dog("d9"));
        assert_eq!(modal.handle_input(KeyCode::Char('y')), ModalAction::CopyImageUrl);
        assert_eq!(modal.handle_input(KeyCode::Enter), ModalAction::Close);
    }
}
