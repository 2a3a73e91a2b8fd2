//! Reader for persisted snapshots.
//!
//! `mkgrokdump` emits the tables as Python literals:
//!
//! ```text
//! INSTANCE_TYPES = { 247: "MAP_TYPE", ... }
//! KNOWN_MAPS = { ("read_only_space", 0x02139): (247, "MetaMap"), ... }
//! KNOWN_OBJECTS = { ("old_space", 0x0439d): "ExternalMap", ... }
//! HEAP_FIRST_PAGES = { 0x000c0000: "old_space", ... }
//! FRAME_MARKERS = ( "ENTRY", ... )
//! ```
//!
//! Reading happens in two steps. The source is first parsed into generic [`Literal`] trees
//! (integers, strings, tuples, dicts) with the [`crate::Parser`]; each assignment is then
//! converted into its table, checking the shape of every key and value. Errors name the
//! snapshot line of the offending literal.
//!
//! Only the Python syntax `mkgrokdump` emits is understood. Strings accept the escapes
//! `\\`, `\"`, `\'`, `\n`, `\t` and `\r`; numeric and named escapes such as `\x41` or
//! `\u0041` and prefixed strings like `r"..."` are malformed.

use log::warn;

use crate::{
    file::parser::Parser,
    snapshot::{
        FrameMarkers, HeapFirstPages, HeapSpace, InstanceTypes, KnownMaps, KnownObjects,
        LoadConfig, Snapshot, SnapshotBuilder, SpaceOffset, TableKind,
    },
    Error, Result,
};

/// Deepest literal nesting accepted. The generated tables nest two levels deep.
const MAX_NESTING: usize = 16;

/// A parsed literal and the snapshot line it starts on.
#[derive(Debug, PartialEq)]
struct Literal {
    line: usize,
    value: Value,
}

#[derive(Debug, PartialEq)]
enum Value {
    Int(u64),
    Str(String),
    Tuple(Vec<Literal>),
    Dict(Vec<(Literal, Literal)>),
}

impl Literal {
    fn kind(&self) -> &'static str {
        match self.value {
            Value::Int(_) => "integer",
            Value::Str(_) => "string",
            Value::Tuple(_) => "tuple",
            Value::Dict(_) => "dict",
        }
    }

    fn unexpected(&self, expected: &str) -> Error {
        malformed_error!(
            "line {}: expected {}, found {}",
            self.line,
            expected,
            self.kind()
        )
    }

    fn into_int(self) -> Result<u64> {
        match self.value {
            Value::Int(value) => Ok(value),
            _ => Err(self.unexpected("integer")),
        }
    }

    fn into_u16(self) -> Result<u16> {
        let line = self.line;
        let value = self.into_int()?;
        u16::try_from(value)
            .map_err(|_| malformed_error!("line {}: {} does not fit into 16 bits", line, value))
    }

    fn into_u32(self) -> Result<u32> {
        let line = self.line;
        let value = self.into_int()?;
        u32::try_from(value).map_err(|_| {
            malformed_error!("line {}: 0x{:x} does not fit into 32 bits", line, value)
        })
    }

    fn into_string(self) -> Result<String> {
        match self.value {
            Value::Str(value) => Ok(value),
            _ => Err(self.unexpected("string")),
        }
    }

    fn into_space(self) -> Result<HeapSpace> {
        HeapSpace::from_name(&self.into_string()?)
    }

    fn into_pair(self) -> Result<(Literal, Literal)> {
        let line = self.line;
        match self.value {
            Value::Tuple(items) if items.len() == 2 => {
                let mut items = items.into_iter();
                match (items.next(), items.next()) {
                    (Some(first), Some(second)) => Ok((first, second)),
                    _ => Err(malformed_error!("line {}: expected pair", line)),
                }
            }
            Value::Tuple(items) => Err(malformed_error!(
                "line {}: expected pair, found tuple of {}",
                line,
                items.len()
            )),
            _ => Err(self.unexpected("pair")),
        }
    }

    fn into_tuple(self) -> Result<Vec<Literal>> {
        match self.value {
            Value::Tuple(items) => Ok(items),
            _ => Err(self.unexpected("tuple")),
        }
    }

    fn into_dict(self) -> Result<Vec<(Literal, Literal)>> {
        match self.value {
            Value::Dict(items) => Ok(items),
            _ => Err(self.unexpected("dict")),
        }
    }

    // ("space", offset)
    fn into_space_offset(self) -> Result<SpaceOffset> {
        let (space, offset) = self.into_pair()?;
        Ok(SpaceOffset::new(space.into_space()?, offset.into_u32()?))
    }
}

/// Read a complete snapshot from generated source text.
///
/// # Errors
/// Returns [`crate::Error::Empty`] for empty input and the errors documented on
/// [`Snapshot::parse`] otherwise.
pub(crate) fn read(source: &str, config: LoadConfig) -> Result<Snapshot> {
    if source.is_empty() {
        return Err(Error::Empty);
    }

    let mut parser = Parser::new(source.as_bytes());
    let mut builder = SnapshotBuilder::new();

    loop {
        parser.skip_trivia();
        if !parser.has_more_data() {
            break;
        }

        let line = parser.line();
        let name = parser.read_identifier()?;
        parser.expect_byte(b'=')?;
        let literal = read_literal(&mut parser, 0)?;

        let Ok(kind) = name.parse::<TableKind>() else {
            if config.allow_unknown_assignments {
                warn!("line {line}: skipping unknown assignment {name}");
                continue;
            }
            return Err(malformed_error!(
                "line {}: unknown assignment {}",
                line,
                name
            ));
        };

        if builder.has_table(kind) {
            return Err(malformed_error!(
                "line {}: {} is assigned more than once",
                line,
                kind
            ));
        }

        builder = match kind {
            TableKind::InstanceTypes => builder.instance_types(read_instance_types(literal)?),
            TableKind::KnownMaps => builder.known_maps(read_known_maps(literal)?),
            TableKind::KnownObjects => builder.known_objects(read_known_objects(literal)?),
            TableKind::HeapFirstPages => builder.heap_first_pages(read_heap_first_pages(literal)?),
            TableKind::FrameMarkers => builder.frame_markers(read_frame_markers(literal)?),
        };
    }

    builder.build(config)
}

fn read_literal(parser: &mut Parser<'_>, depth: usize) -> Result<Literal> {
    parser.skip_trivia();
    let line = parser.line();
    if depth > MAX_NESTING {
        return Err(malformed_error!("line {}: literal nested too deeply", line));
    }

    let value = match parser.peek_byte()? {
        b'(' => {
            parser.advance()?;
            let (mut items, trailing_comma) = read_sequence(parser, b')', depth)?;
            // `(x)` is a parenthesized value, `(x,)` a tuple
            if items.len() == 1 && !trailing_comma {
                return Ok(items.remove(0));
            }
            Value::Tuple(items)
        }
        b'{' => {
            parser.advance()?;
            Value::Dict(read_dict(parser, depth)?)
        }
        b'"' | b'\'' => Value::Str(parser.read_string()?),
        b'0'..=b'9' => Value::Int(parser.read_integer()?),
        other => {
            return Err(malformed_error!(
                "line {}: unexpected '{}'",
                line,
                char::from(other).escape_default()
            ))
        }
    };

    Ok(Literal { line, value })
}

// Items up to `close`, which has already been opened. Also reports whether the last item
// was followed by a comma.
fn read_sequence(
    parser: &mut Parser<'_>,
    close: u8,
    depth: usize,
) -> Result<(Vec<Literal>, bool)> {
    let mut items = Vec::new();
    loop {
        if parser.consume_byte(close) {
            let trailing_comma = !items.is_empty();
            return Ok((items, trailing_comma));
        }

        items.push(read_literal(parser, depth + 1)?);

        if !parser.consume_byte(b',') {
            parser.expect_byte(close)?;
            return Ok((items, false));
        }
    }
}

fn read_dict(parser: &mut Parser<'_>, depth: usize) -> Result<Vec<(Literal, Literal)>> {
    let mut items = Vec::new();
    loop {
        if parser.consume_byte(b'}') {
            return Ok(items);
        }

        let key = read_literal(parser, depth + 1)?;
        parser.expect_byte(b':')?;
        let value = read_literal(parser, depth + 1)?;
        items.push((key, value));

        if !parser.consume_byte(b',') {
            parser.expect_byte(b'}')?;
            return Ok(items);
        }
    }
}

fn read_instance_types(literal: Literal) -> Result<InstanceTypes> {
    let entries = literal
        .into_dict()?
        .into_iter()
        .map(|(code, name)| Ok((code.into_u16()?, name.into_string()?)))
        .collect::<Result<Vec<_>>>()?;

    InstanceTypes::from_entries(entries)
}

fn read_known_maps(literal: Literal) -> Result<KnownMaps> {
    let entries = literal
        .into_dict()?
        .into_iter()
        .map(|(key, value)| {
            let key = key.into_space_offset()?;
            let (instance_type, name) = value.into_pair()?;
            Ok((key, instance_type.into_u16()?, name.into_string()?))
        })
        .collect::<Result<Vec<_>>>()?;

    KnownMaps::from_entries(entries)
}

fn read_known_objects(literal: Literal) -> Result<KnownObjects> {
    let entries = literal
        .into_dict()?
        .into_iter()
        .map(|(key, name)| Ok((key.into_space_offset()?, name.into_string()?)))
        .collect::<Result<Vec<_>>>()?;

    KnownObjects::from_entries(entries)
}

fn read_heap_first_pages(literal: Literal) -> Result<HeapFirstPages> {
    let entries = literal
        .into_dict()?
        .into_iter()
        .map(|(page, space)| Ok((page.into_u32()?, space.into_space()?)))
        .collect::<Result<Vec<_>>>()?;

    HeapFirstPages::from_entries(entries)
}

fn read_frame_markers(literal: Literal) -> Result<FrameMarkers> {
    let names = literal
        .into_tuple()?
        .into_iter()
        .map(Literal::into_string)
        .collect::<Result<Vec<_>>>()?;

    FrameMarkers::from_names(names)
}
