//! Document Upload - View Model

use leptos::prelude::*;

#[derive(Clone, Copy)]
pub struct DocumentUploadVm {
    /// web_sys::File не Send, поэтому локальный сигнал
    pub selected: RwSignal<Option<web_sys::File>, LocalStorage>,
    pub title: RwSignal<String>,
    pub uploading: RwSignal<bool>,
}

impl DocumentUploadVm {
    pub fn new() -> Self {
        Self {
            selected: RwSignal::new_local(None),
            title: RwSignal::new(String::new()),
            uploading: RwSignal::new(false),
        }
    }

    pub fn selected_name(&self) -> Option<String> {
        self.selected.with(|f| f.as_ref().map(|f| f.name()))
    }

    pub fn clear_selection(&self) {
        self.selected.set(None);
        self.title.set(String::new());
    }
}

/// Upload доступен только с выбранным файлом и без активной загрузки
pub fn can_upload(has_file: bool, uploading: bool) -> bool {
    has_file && !uploading
}

/// Сброс выбора: те же условия, что и upload
pub fn can_clear(has_file: bool, uploading: bool) -> bool {
    has_file && !uploading
}
