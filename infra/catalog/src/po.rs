//! Line-oriented parser for gettext `.po` text.

use crate::catalog::{Catalog, context_key};
use crate::error::CatalogError;
use crate::plural::PluralRule;
use std::collections::BTreeMap;
use tracing::warn;

/// Upper bound on `msgstr[N]` indices.
const MAX_PLURAL_FORMS: usize = 32;

/// The keyword a continuation line (`"..."`) appends to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Field {
    Context,
    Id,
    PluralId,
    Str(usize),
}

#[derive(Debug, Default)]
struct Entry {
    context: Option<String>,
    id: Option<String>,
    plural_id: Option<String>,
    strs: BTreeMap<usize, String>,
    fuzzy: bool,
    last: Option<Field>,
    start_line: usize,
}

impl Entry {
    fn has_translation(&self) -> bool {
        !self.strs.is_empty()
    }

    fn is_blank(&self) -> bool {
        self.context.is_none() && self.id.is_none() && self.strs.is_empty()
    }

    fn field_mut(&mut self, field: Field) -> &mut String {
        match field {
            Field::Context => self.context.get_or_insert_with(String::new),
            Field::Id => self.id.get_or_insert_with(String::new),
            Field::PluralId => self.plural_id.get_or_insert_with(String::new),
            Field::Str(index) => self.strs.entry(index).or_default(),
        }
    }
}

pub(crate) fn parse(source: &str) -> Result<Catalog, CatalogError> {
    let mut catalog = Catalog::new();
    let mut entry = Entry::default();
    let source = source.strip_prefix('\u{feff}').unwrap_or(source);

    for (index, raw) in source.lines().enumerate() {
        let line_no = index + 1;
        let line = raw.trim();

        if line.is_empty() {
            finish(&mut catalog, std::mem::take(&mut entry))?;
            continue;
        }

        if let Some(comment) = line.strip_prefix('#') {
            if entry.has_translation() {
                finish(&mut catalog, std::mem::take(&mut entry))?;
            }
            if let Some(flags) = comment.strip_prefix(',') {
                entry.fuzzy |= flags.split(',').any(|flag| flag.trim() == "fuzzy");
            }
            entry.last = None;
            continue;
        }

        if line.starts_with('"') {
            let Some(field) = entry.last else {
                return Err(CatalogError::malformed(line_no, "String without a keyword"));
            };
            let value = unquote(line, line_no)?;
            entry.field_mut(field).push_str(&value);
            continue;
        }

        let (keyword, rest) = line.split_once(char::is_whitespace).ok_or_else(|| {
            CatalogError::malformed(line_no, format!("Keyword without a value: '{line}'"))
        })?;
        let value = unquote(rest.trim_start(), line_no)?;

        let field = match keyword {
            "msgctxt" => {
                if entry.has_translation() || entry.id.is_some() {
                    finish(&mut catalog, std::mem::take(&mut entry))?;
                }
                Field::Context
            },
            "msgid" => {
                if entry.has_translation() {
                    finish(&mut catalog, std::mem::take(&mut entry))?;
                } else if entry.id.is_some() {
                    return Err(CatalogError::malformed(line_no, "msgid without msgstr"));
                }
                Field::Id
            },
            "msgid_plural" => {
                require_id(&entry, line_no, keyword)?;
                Field::PluralId
            },
            "msgstr" => {
                require_id(&entry, line_no, keyword)?;
                Field::Str(0)
            },
            other => {
                let index = plural_index(other).ok_or_else(|| {
                    CatalogError::malformed(line_no, format!("Unknown keyword '{other}'"))
                })?;
                if index >= MAX_PLURAL_FORMS {
                    return Err(CatalogError::malformed(
                        line_no,
                        format!("Plural index {index} exceeds {MAX_PLURAL_FORMS} forms"),
                    ));
                }
                require_id(&entry, line_no, keyword)?;
                Field::Str(index)
            },
        };

        if entry.is_blank() {
            entry.start_line = line_no;
        }
        *entry.field_mut(field) = value;
        entry.last = Some(field);
    }

    finish(&mut catalog, entry)?;
    Ok(catalog)
}

fn require_id(entry: &Entry, line_no: usize, keyword: &str) -> Result<(), CatalogError> {
    if entry.id.is_none() {
        return Err(CatalogError::malformed(line_no, format!("{keyword} before msgid")));
    }
    Ok(())
}

/// Parses the `N` out of `msgstr[N]`.
fn plural_index(keyword: &str) -> Option<usize> {
    keyword.strip_prefix("msgstr[")?.strip_suffix(']')?.parse().ok()
}

fn finish(catalog: &mut Catalog, entry: Entry) -> Result<(), CatalogError> {
    let Some(id) = entry.id else {
        if entry.context.is_some() || !entry.strs.is_empty() {
            return Err(CatalogError::malformed(entry.start_line, "Entry without msgid"));
        }
        return Ok(());
    };

    if entry.strs.is_empty() {
        return Err(CatalogError::malformed(entry.start_line, "msgid without msgstr"));
    }

    if id.is_empty() && entry.context.is_none() {
        let header = entry.strs.get(&0).map_or("", String::as_str);
        for line in header.lines() {
            if let Some((name, value)) = line.split_once(':') {
                catalog.insert_header(name.trim(), value.trim());
            }
        }
        let plural_rule = catalog.header("Plural-Forms").map(PluralRule::parse);
        match plural_rule {
            Some(Ok(rule)) => catalog.set_plural_rule(rule),
            Some(Err(err)) => warn!(%err, "Ignoring unusable Plural-Forms header"),
            None => {},
        }
        return Ok(());
    }

    if entry.fuzzy {
        return Ok(());
    }

    if entry.strs.values().all(String::is_empty) {
        return Ok(());
    }

    // Missing `msgstr[N]` indices stay as empty, untranslated forms.
    let len = entry.strs.keys().next_back().map_or(0, |last| last + 1);
    let mut forms = vec![String::new(); len];
    for (index, form) in entry.strs {
        forms[index] = form;
    }

    let key = match entry.context {
        Some(context) => context_key(&context, &id),
        None => id,
    };
    catalog.insert_forms(key, forms);
    Ok(())
}

/// Strips the surrounding quotes of a `.po` string literal and resolves escapes.
fn unquote(literal: &str, line_no: usize) -> Result<String, CatalogError> {
    let inner = literal
        .strip_prefix('"')
        .and_then(|s| s.strip_suffix('"'))
        .filter(|_| literal.len() >= 2)
        .ok_or_else(|| CatalogError::malformed(line_no, "Expected a quoted string"))?;

    let mut out = String::with_capacity(inner.len());
    let mut chars = inner.chars();
    while let Some(c) = chars.next() {
        match c {
            '\\' => {
                let escaped = match chars.next() {
                    Some('n') => '\n',
                    Some('t') => '\t',
                    Some('r') => '\r',
                    Some('a') => '\u{7}',
                    Some('b') => '\u{8}',
                    Some('f') => '\u{c}',
                    Some('v') => '\u{b}',
                    Some('\\') => '\\',
                    Some('"') => '"',
                    Some(other) => {
                        return Err(CatalogError::malformed(
                            line_no,
                            format!("Unknown escape sequence '\\{other}'"),
                        ));
                    },
                    None => {
                        return Err(CatalogError::malformed(line_no, "Dangling escape at end of string"));
                    },
                };
                out.push(escaped);
            },
            '"' => return Err(CatalogError::malformed(line_no, "Unescaped quote inside string")),
            c => out.push(c),
        }
    }
    Ok(out)
}
