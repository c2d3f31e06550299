use tracing::debug;

/// A file chosen through the platform file picker. Only the name is
/// guaranteed; the size is filled in when the picker reports it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FileHandle {
    pub name: String,
    pub size: Option<u64>,
}

impl FileHandle {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            size: None,
        }
    }

    pub fn with_size(mut self, size: u64) -> Self {
        self.size = Some(size);
        self
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Attachment {
    pub id: u64,
    pub file: FileHandle,
}

/// Files staged for the next message.
///
/// Ids come from a counter that lives as long as the set and is never reset,
/// so an id is never handed out twice even after `remove` or `clear`.
#[derive(Clone, Debug, Default)]
pub struct AttachmentSet {
    items: Vec<Attachment>,
    last_id: u64,
}

impl AttachmentSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stages every file and returns the ids assigned, in order.
    pub fn add_files<I>(&mut self, files: I) -> Vec<u64>
    where
        I: IntoIterator<Item = FileHandle>,
    {
        files
            .into_iter()
            .map(|file| {
                self.last_id += 1;
                let id = self.last_id;
                debug!(id, name = %file.name, "attachment staged");
                self.items.push(Attachment { id, file });
                id
            })
            .collect()
    }

    pub fn remove(&mut self, id: u64) -> Option<Attachment> {
        let index = self.items.iter().position(|item| item.id == id);
        match index {
            Some(index) => Some(self.items.remove(index)),
            None => {
                debug!(id, "remove of unknown attachment ignored");
                None
            }
        }
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Attachment> {
        self.items.iter()
    }

    pub fn as_slice(&self) -> &[Attachment] {
        &self.items
    }
}
