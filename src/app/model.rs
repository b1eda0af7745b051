use crate::playlist::Playlist;

/// Which path the prompt is asking for.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum PromptKind {
    AddFile,
    AddFolder,
}

/// An in-progress path prompt (the terminal stand-in for a file dialog).
#[derive(Clone, Debug)]
pub struct Prompt {
    pub kind: PromptKind,
    pub input: String,
}

/// The main application model.
pub struct App {
    pub playlist: Playlist,
    /// The highlighted playlist row. Independent of the playlist cursor:
    /// browsing with j/k never changes what is playing.
    pub selected: usize,
    pub prompt: Option<Prompt>,
    /// One-line non-blocking notification; replaced by the next one.
    pub notice: Option<String>,
}

impl App {
    pub fn new(playlist: Playlist) -> Self {
        Self {
            playlist,
            selected: 0,
            prompt: None,
            notice: None,
        }
    }

    pub fn has_tracks(&self) -> bool {
        !self.playlist.is_empty()
    }

    /// Move the highlight down one row, wrapping.
    pub fn select_next(&mut self) {
        let len = self.playlist.len();
        if len > 0 {
            self.selected = (self.selected + 1) % len;
        }
    }

    /// Move the highlight up one row, wrapping.
    pub fn select_prev(&mut self) {
        let len = self.playlist.len();
        if len > 0 {
            self.selected = (self.selected + len - 1) % len;
        }
    }

    /// Keep the highlight inside the playlist after it shrank or emptied.
    pub fn clamp_selected(&mut self) {
        let len = self.playlist.len();
        if len == 0 {
            self.selected = 0;
        } else if self.selected >= len {
            self.selected = len - 1;
        }
    }

    pub fn set_notice(&mut self, text: impl Into<String>) {
        self.notice = Some(text.into());
    }

    pub fn open_prompt(&mut self, kind: PromptKind) {
        self.prompt = Some(Prompt {
            kind,
            input: String::new(),
        });
    }

    pub fn cancel_prompt(&mut self) {
        self.prompt = None;
    }

    /// Take the prompt out of the model for committing on Enter.
    pub fn take_prompt(&mut self) -> Option<Prompt> {
        self.prompt.take()
    }

    pub fn push_prompt_char(&mut self, c: char) {
        if let Some(p) = self.prompt.as_mut() {
            p.input.push(c);
        }
    }

    pub fn pop_prompt_char(&mut self) {
        if let Some(p) = self.prompt.as_mut() {
            p.input.pop();
        }
    }
}
