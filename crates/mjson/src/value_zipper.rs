use core::fmt;

use crate::{
    token::TokenKind,
    value::{Object, Value},
};

/// The two kinds of value that can be open while a tree is being built.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ContainerKind {
    Array,
    Object,
}

impl ContainerKind {
    pub(crate) fn opened_by(kind: TokenKind) -> Option<Self> {
        match kind {
            TokenKind::ArrayStart => Some(ContainerKind::Array),
            TokenKind::ObjectStart => Some(ContainerKind::Object),
            _ => None,
        }
    }

    pub(crate) fn closed_by(self) -> TokenKind {
        match self {
            ContainerKind::Array => TokenKind::ArrayEnd,
            ContainerKind::Object => TokenKind::ObjectEnd,
        }
    }

    pub(crate) fn empty(self) -> Value {
        match self {
            ContainerKind::Array => Value::Array(Vec::new()),
            ContainerKind::Object => Value::Object(Object::new()),
        }
    }

    fn of(value: &Value) -> Option<Self> {
        match value {
            Value::Array(_) => Some(ContainerKind::Array),
            Value::Object(_) => Some(ContainerKind::Object),
            _ => None,
        }
    }
}

/// An open container and the key it is stored under once it closes. Children
/// of arrays carry no key.
#[derive(Debug)]
struct Frame {
    container: Value,
    key: Option<String>,
}

/// Builds a value tree bottom-up while tracking the chain of open containers.
///
/// Every open container is owned by the stack. Scalars go straight into the
/// active container; a container only becomes part of its parent when it is
/// closed, so each step touches the top of the stack alone.
#[derive(Debug, Default)]
pub(crate) struct ValueZipper {
    stack: Vec<Frame>, // 0 = root, last = active container
    root: Option<Value>,
    rooted: bool,
}

impl ValueZipper {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Whether a root has been opened, whether or not it is closed again.
    pub(crate) fn has_root(&self) -> bool {
        self.rooted
    }

    pub(crate) fn depth(&self) -> usize {
        self.stack.len()
    }

    pub(crate) fn is_open(&self) -> bool {
        !self.stack.is_empty()
    }

    pub(crate) fn active_kind(&self) -> Option<ContainerKind> {
        self.stack
            .last()
            .and_then(|frame| ContainerKind::of(&frame.container))
    }

    pub(crate) fn open_root(&mut self, kind: ContainerKind) -> Result<(), ZipperError> {
        if self.rooted {
            return Err(ZipperError::RootTaken);
        }
        self.rooted = true;
        self.stack.push(Frame {
            container: kind.empty(),
            key: None,
        });
        Ok(())
    }

    /// Appends `value` to the active array. A container becomes the new active
    /// container.
    pub(crate) fn append(&mut self, value: Value) -> Result<(), ZipperError> {
        let frame = self.stack.last_mut().ok_or(ZipperError::NothingOpen)?;
        let Value::Array(arr) = &mut frame.container else {
            return Err(ZipperError::ExpectedArray);
        };
        if ContainerKind::of(&value).is_none() {
            arr.push(value);
            return Ok(());
        }
        self.stack.push(Frame {
            container: value,
            key: None,
        });
        Ok(())
    }

    /// Stores `value` under `key` in the active object and reports whether the
    /// key was already present. A container becomes the new active container
    /// and replaces the earlier value when it closes.
    pub(crate) fn insert(&mut self, key: String, value: Value) -> Result<bool, ZipperError> {
        let frame = self.stack.last_mut().ok_or(ZipperError::NothingOpen)?;
        let Value::Object(obj) = &mut frame.container else {
            return Err(ZipperError::ExpectedObject);
        };
        if ContainerKind::of(&value).is_none() {
            return Ok(obj.insert(key, value).is_some());
        }
        let replaced = obj.contains_key(&key);
        self.stack.push(Frame {
            container: value,
            key: Some(key),
        });
        Ok(replaced)
    }

    /// Closes the active container and hands it to its parent, or makes it
    /// the finished root.
    pub(crate) fn pop(&mut self) -> Result<ContainerKind, ZipperError> {
        let Frame { container, key } = self.stack.pop().ok_or(ZipperError::NothingOpen)?;
        let kind = ContainerKind::of(&container).ok_or(ZipperError::BrokenPath)?;
        let Some(parent) = self.stack.last_mut() else {
            self.root = Some(container);
            return Ok(kind);
        };
        match (&mut parent.container, key) {
            (Value::Object(obj), Some(key)) => {
                obj.insert(key, container);
            }
            (Value::Array(arr), None) => arr.push(container),
            _ => return Err(ZipperError::BrokenPath),
        }
        Ok(kind)
    }

    /// The finished root. `None` while any container is still open.
    pub(crate) fn into_value(self) -> Option<Value> {
        self.root
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub(crate) enum ZipperError {
    ExpectedObject,
    ExpectedArray,
    NothingOpen,
    RootTaken,
    BrokenPath,
}

impl fmt::Display for ZipperError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ZipperError::ExpectedObject => "expected the active container to be an object",
            ZipperError::ExpectedArray => "expected the active container to be an array",
            ZipperError::NothingOpen => "no container is open",
            ZipperError::RootTaken => "the root has already been opened",
            ZipperError::BrokenPath => "closed container does not fit its parent",
        })
    }
}
