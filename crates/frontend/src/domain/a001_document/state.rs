use contracts::domain::a001_document::Document;

/// Срез `documents`: список загруженных за сессию документов.
///
/// Уникальность id не проверяется.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DocumentsState {
    pub items: Vec<Document>,
}

impl DocumentsState {
    pub fn set_all(&mut self, items: Vec<Document>) {
        self.items = items;
    }

    pub fn add(&mut self, doc: Document) {
        self.items.push(doc);
    }

    pub fn remove(&mut self, id: &str) {
        self.items.retain(|d| d.id != id);
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }
}
