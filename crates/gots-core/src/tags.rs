//! Go struct tags: `json:"name,omitempty" typescript:"-"`.
//!
//! Follows the conventional `key:"value"` syntax understood by
//! `reflect.StructTag`, but rejects malformed input instead of silently
//! ignoring the rest of the tag.

/// One `key:"name,opt1,opt2"` entry.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Tag {
    pub key: String,
    pub name: String,
    pub options: Vec<String>,
}

impl Tag {
    pub fn has_option(&self, option: &str) -> bool {
        self.options.iter().any(|o| o == option)
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct StructTags {
    tags: Vec<Tag>,
}

impl StructTags {
    pub fn get(&self, key: &str) -> Option<&Tag> {
        self.tags.iter().find(|t| t.key == key)
    }
}

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum TagError {
    #[error("bad syntax for struct tag key at offset {0}")]
    Key(usize),

    #[error("bad syntax for struct tag pair at offset {0}")]
    Pair(usize),

    #[error("bad syntax for struct tag value at offset {0}")]
    Value(usize),
}

/// Parses a raw struct tag (without the surrounding backquotes).
pub fn parse(tag: &str) -> Result<StructTags, TagError> {
    let bytes = tag.as_bytes();
    let mut tags = Vec::new();
    let mut pos = 0;

    loop {
        while pos < bytes.len() && bytes[pos] == b' ' {
            pos += 1;
        }
        if pos == bytes.len() {
            break;
        }

        let key_start = pos;
        while pos < bytes.len()
            && bytes[pos] > b' '
            && bytes[pos] != b':'
            && bytes[pos] != b'"'
            && bytes[pos] != 0x7f
        {
            pos += 1;
        }
        if pos == key_start {
            return Err(TagError::Key(key_start));
        }
        if pos + 1 >= bytes.len() || bytes[pos] != b':' {
            return Err(TagError::Pair(pos));
        }
        if bytes[pos + 1] != b'"' {
            return Err(TagError::Value(pos + 1));
        }
        let key = &tag[key_start..pos];

        let quote_start = pos + 1;
        pos = quote_start + 1;
        while pos < bytes.len() && bytes[pos] != b'"' {
            if bytes[pos] == b'\\' {
                pos += 1;
            }
            pos += 1;
        }
        if pos >= bytes.len() {
            return Err(TagError::Value(quote_start));
        }
        let value = unquote(&tag[quote_start + 1..pos]).ok_or(TagError::Value(quote_start))?;
        pos += 1;

        let mut parts = value.split(',').map(str::to_string);
        let name = parts.next().unwrap_or_default();
        tags.push(Tag {
            key: key.to_string(),
            name,
            options: parts.collect(),
        });
    }

    Ok(StructTags { tags })
}

fn unquote(body: &str) -> Option<String> {
    let mut out = String::with_capacity(body.len());
    let mut chars = body.chars();
    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        let escaped = match chars.next()? {
            '\\' => '\\',
            '"' => '"',
            '\'' => '\'',
            'n' => '\n',
            't' => '\t',
            'r' => '\r',
            _ => return None,
        };
        out.push(escaped);
    }
    Some(out)
}
