//! Column definitions and header state for the dog table

use crate::model::{Dog, SortField};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Align {
    Center,
    Right,
}

/// Table column, in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Column {
    Image,
    Name,
    Breed,
    Age,
    ZipCode,
}

impl Column {
    pub const ALL: [Column; 5] = [
        Column::Image,
        Column::Name,
        Column::Breed,
        Column::Age,
        Column::ZipCode,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Column::Image => "Image",
            Column::Name => "Dog Name",
            Column::Breed => "Breed",
            Column::Age => "Age(yrs)",
            Column::ZipCode => "Zip Code",
        }
    }

    pub fn align(&self) -> Align {
        match self {
            Column::Image | Column::Name | Column::Breed => Align::Center,
            Column::Age | Column::ZipCode => Align::Right,
        }
    }

    /// Sort field behind this column; `None` for columns that ignore sort clicks
    pub fn sort_field(&self) -> Option<SortField> {
        match self {
            Column::Name => Some(SortField::Name),
            Column::Breed => Some(SortField::Breed),
            Column::Age => Some(SortField::Age),
            Column::Image | Column::ZipCode => None,
        }
    }

    pub fn is_sortable(&self) -> bool {
        self.sort_field().is_some()
    }

    pub fn cell(&self, dog: &Dog) -> String {
        match self {
            Column::Image => dog.img.clone(),
            Column::Name => dog.name.clone(),
            Column::Breed => dog.breed.clone(),
            Column::Age => dog.age.to_string(),
            Column::ZipCode => dog.zip_code.clone(),
        }
    }
}

/// Visual state of the "select all" checkbox
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeaderCheckbox {
    Unchecked,
    Indeterminate,
    Checked,
}

impl HeaderCheckbox {
    /// Derive from the displayed rows and the selection
    pub fn from_rows(displayed: &[Dog], selected: &[String]) -> Self {
        let is_selected = |dog: &Dog| selected.iter().any(|id| id == &dog.id);
        let all = displayed.iter().all(is_selected);
        let any = displayed.iter().any(is_selected);

        if !displayed.is_empty() && all {
            HeaderCheckbox::Checked
        } else if any {
            HeaderCheckbox::Indeterminate
        } else {
            HeaderCheckbox::Unchecked
        }
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            HeaderCheckbox::Unchecked => "[ ]",
            HeaderCheckbox::Indeterminate => "[-]",
            HeaderCheckbox::Checked => "[x]",
        }
    }
}
