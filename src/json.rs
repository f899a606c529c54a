//! JSON values, and their grammar made from the parsers of this crate.
//!
//! The grammar is recursive, as values contain objects and arrays that contain
//! values, so it goes through a [`Rule`](../struct.Rule.html).

use std::{
    collections::{BTreeMap, btree_map},
    fmt::{self, Write as _},
    iter::FromIterator,
    str::FromStr,
};

use crate::{
    Error, Parser, ParserStream, Result, Rule, SubParserStream,
    boolean, end_of_input, skip_space, string, symbol,
    combinator::for_list,
    common::inmem::parse_from,
    kind::Value,
};


/// A JSON value.
#[derive(Clone, PartialEq, Debug)]
pub enum JsonValue {
    /// `null`.
    Null,
    /// `true` or `false`.
    Bool(bool),
    /// A number, which is always held as a double.
    Number(f64),
    /// A string.
    String(String),
    /// An object.
    Object(JsonObject),
    /// An array.
    Array(Vec<JsonValue>),
}

impl Default for JsonValue {
    fn default() -> Self {
        JsonValue::Null
    }
}

impl JsonValue {
    /// Whether this is `null`.
    pub fn is_null(&self) -> bool {
        matches!(self, JsonValue::Null)
    }

    /// The boolean, if this is one.
    pub fn as_bool(&self) -> Option<bool> {
        if let JsonValue::Bool(b) = self { Some(*b) } else { None }
    }

    /// The number, if this is one.
    pub fn as_f64(&self) -> Option<f64> {
        if let JsonValue::Number(n) = self { Some(*n) } else { None }
    }

    /// The string, if this is one.
    pub fn as_str(&self) -> Option<&str> {
        if let JsonValue::String(s) = self { Some(s) } else { None }
    }

    /// The object, if this is one.
    pub fn as_object(&self) -> Option<&JsonObject> {
        if let JsonValue::Object(o) = self { Some(o) } else { None }
    }

    /// The elements, if this is an array.
    pub fn as_array(&self) -> Option<&[JsonValue]> {
        if let JsonValue::Array(a) = self { Some(a) } else { None }
    }
}

impl From<bool> for JsonValue {
    fn from(b: bool) -> Self {
        JsonValue::Bool(b)
    }
}

impl From<f64> for JsonValue {
    fn from(n: f64) -> Self {
        JsonValue::Number(n)
    }
}

impl From<i32> for JsonValue {
    fn from(n: i32) -> Self {
        JsonValue::Number(n.into())
    }
}

impl From<&str> for JsonValue {
    fn from(s: &str) -> Self {
        JsonValue::String(s.to_owned())
    }
}

impl From<String> for JsonValue {
    fn from(s: String) -> Self {
        JsonValue::String(s)
    }
}

impl From<JsonObject> for JsonValue {
    fn from(o: JsonObject) -> Self {
        JsonValue::Object(o)
    }
}

impl From<Vec<JsonValue>> for JsonValue {
    fn from(a: Vec<JsonValue>) -> Self {
        JsonValue::Array(a)
    }
}


/// The members of a JSON object, ordered by name.
#[derive(Clone, PartialEq, Default, Debug)]
pub struct JsonObject {
    members: BTreeMap<String, JsonValue>,
}

impl JsonObject {
    /// Make an empty one.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// The member named `name`.
    pub fn get(&self, name: &str) -> Option<&JsonValue> {
        self.members.get(name)
    }

    /// The member named `name`, mutably.
    pub fn get_mut(&mut self, name: &str) -> Option<&mut JsonValue> {
        self.members.get_mut(name)
    }

    /// Whether there is a member named `name`.
    pub fn contains(&self, name: &str) -> bool {
        self.members.contains_key(name)
    }

    /// Set the member named `name`, and return the value it replaced.
    pub fn insert<V>(&mut self, name: impl Into<String>, value: V) -> Option<JsonValue>
        where V: Into<JsonValue>,
    {
        self.members.insert(name.into(), value.into())
    }

    /// Set the member named `name`.
    pub fn set<V>(&mut self, name: impl Into<String>, value: V)
        where V: Into<JsonValue>,
    {
        let _replaced = self.insert(name, value);
    }

    /// Remove the member named `name`, and return its value.
    pub fn remove(&mut self, name: &str) -> Option<JsonValue> {
        self.members.remove(name)
    }

    /// How many members there are.
    pub fn len(&self) -> usize {
        self.members.len()
    }

    /// Whether there are no members.
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// The members in order of their names.
    pub fn iter(&self) -> btree_map::Iter<'_, String, JsonValue> {
        self.members.iter()
    }
}

impl<'a> IntoIterator for &'a JsonObject {
    type Item = (&'a String, &'a JsonValue);
    type IntoIter = btree_map::Iter<'a, String, JsonValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<N, V> FromIterator<(N, V)> for JsonObject
    where N: Into<String>,
          V: Into<JsonValue>,
{
    fn from_iter<I>(members: I) -> Self
        where I: IntoIterator<Item = (N, V)>,
    {
        Self {
            members: members.into_iter().map(|(n, v)| (n.into(), v.into())).collect(),
        }
    }
}


/// Write `s` as a quoted string literal that the string parser reads back.
/// Control characters without a short escape are written as `\u` escapes.
fn write_quoted(f: &mut fmt::Formatter<'_>, s: &str) -> fmt::Result {
    f.write_char('"')?;
    for c in s.chars() {
        match c {
            '"' => f.write_str("\\\"")?,
            '\\' => f.write_str("\\\\")?,
            '\n' => f.write_str("\\n")?,
            '\t' => f.write_str("\\t")?,
            '\r' => f.write_str("\\r")?,
            '\u{8}' => f.write_str("\\b")?,
            '\u{c}' => f.write_str("\\f")?,
            c if c.is_control() => write!(f, "\\u{:04x}", u32::from(c))?,
            c => f.write_char(c)?,
        }
    }
    f.write_char('"')
}

impl fmt::Display for JsonValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            JsonValue::Null => f.write_str("null"),
            JsonValue::Bool(b) => write!(f, "{}", b),
            JsonValue::Number(n) if !n.is_finite() => f.write_str("null"),
            #[allow(clippy::cast_possible_truncation)]
            JsonValue::Number(n) if n.fract() == 0.0 && n.abs() < 1e15 => {
                write!(f, "{}", *n as i64)
            }
            JsonValue::Number(n) => write!(f, "{}", n),
            JsonValue::String(s) => write_quoted(f, s),
            JsonValue::Object(o) => write!(f, "{}", o),
            JsonValue::Array(a) => {
                f.write_char('[')?;
                for (i, v) in a.iter().enumerate() {
                    if i != 0 {
                        f.write_char(',')?;
                    }
                    write!(f, "{}", v)?;
                }
                f.write_char(']')
            }
        }
    }
}

impl fmt::Display for JsonObject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_char('{')?;
        for (i, (name, value)) in self.iter().enumerate() {
            if i != 0 {
                f.write_char(',')?;
            }
            write_quoted(f, name)?;
            write!(f, ":{}", value)?;
        }
        f.write_char('}')
    }
}


/// Matches a JSON number: an optional `-`, digits, optionally a `.` and more
/// digits, and optionally an exponent.
#[derive(Copy, Clone, Default, Debug)]
struct NumberParser;

impl NumberParser {
    /// Append the digits at the current position to `text`, and return how many.
    fn digits<S>(source: &mut S, text: &mut String) -> usize
        where S: ParserStream + ?Sized,
    {
        let mut count = 0;
        while source.read() {
            let c = source.peek();
            if c.is_ascii_digit() {
                text.push(c);
                count += 1;
            } else {
                source.undo();
                break;
            }
        }
        count
    }

    /// Consume the next character and append it to `text` if it is one of
    /// `chars`.
    fn optional<S>(source: &mut S, text: &mut String, chars: &[char]) -> bool
        where S: ParserStream + ?Sized,
    {
        match source.next_char() {
            Some(c) if chars.contains(&c) => {
                text.push(c);
                true
            }
            Some(_) => {
                source.undo();
                false
            }
            None => false,
        }
    }
}

impl Parser for NumberParser {
    type Result = f64;
    type Kind = Value;

    fn read<S>(&self, source: &mut S) -> Option<f64>
        where S: ParserStream + ?Sized,
    {
        let mut context = SubParserStream::new(source);
        let mut text = String::new();
        let _negative = Self::optional(&mut context, &mut text, &['-']);
        if Self::digits(&mut context, &mut text) == 0 {
            return None;
        }
        {
            let mut fraction = SubParserStream::new(&mut context);
            let mut digits = String::new();
            if Self::optional(&mut fraction, &mut digits, &['.'])
                && Self::digits(&mut fraction, &mut digits) != 0
            {
                fraction.accept();
                text.push_str(&digits);
            }
        }
        {
            let mut exponent = SubParserStream::new(&mut context);
            let mut digits = String::new();
            if Self::optional(&mut exponent, &mut digits, &['e', 'E']) {
                let _sign = Self::optional(&mut exponent, &mut digits, &['+', '-']);
                if Self::digits(&mut exponent, &mut digits) != 0 {
                    exponent.accept();
                    text.push_str(&digits);
                }
            }
        }
        let value = text.parse().ok()?;
        context.accept();
        Some(value)
    }
}


/// The grammar of JSON values, with whitespace allowed around every token.
///
/// This holds a recursive [`Rule`](../struct.Rule.html), which is why it
/// cannot be sent to other threads.  It releases the rule when dropped.
#[derive(Debug)]
pub struct JsonParser {
    value: Rule<JsonValue>,
}

impl JsonParser {
    /// Make the grammar.
    pub fn new() -> Self {
        let value: Rule<JsonValue> = Rule::new();

        let member = weft_core::tokenize!(string(), ':', value.clone());
        let members = for_list(member, JsonObject::new(), ',',
                               |object: &mut JsonObject, (name, member)| object.set(name, member));
        let object = (symbol('{') >> members >> skip_space() >> '}').map(JsonValue::Object);

        let elements = value.clone().list(',');
        let array = (symbol('[') >> elements >> skip_space() >> ']').map(JsonValue::Array);

        let alternatives = symbol("null").to(JsonValue::Null)
            | boolean().map(JsonValue::Bool)
            | NumberParser.map(JsonValue::Number)
            | string().map(JsonValue::String)
            | object
            | array;
        value.set(alternatives.token());

        Self { value }
    }
}

impl Default for JsonParser {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for JsonParser {
    fn drop(&mut self) {
        self.value.reset();
    }
}

impl Parser for JsonParser {
    type Result = JsonValue;
    type Kind = Value;

    #[inline]
    fn read<S>(&self, source: &mut S) -> Option<JsonValue>
        where S: ParserStream + ?Sized,
    {
        self.value.read(source)
    }

    #[inline]
    fn skip<S>(&self, source: &mut S) -> bool
        where S: ParserStream + ?Sized,
    {
        self.value.skip(source)
    }
}

weft_core::parser_ops! {
    JsonParser;
}


thread_local! {
    static GRAMMAR: JsonParser = JsonParser::new();
}

/// Parse `input` as one JSON value, which must be all of it except for
/// surrounding whitespace.
///
/// ```
/// use weft::json::parse_json;
///
/// let value = parse_json(r#" {"a": [1, 2.5, "x"]} "#).unwrap();
/// assert_eq!(value.to_string(), r#"{"a":[1,2.5,"x"]}"#);
/// assert!(parse_json("[1, 2] 3").is_err());
/// ```
pub fn parse_json(input: &str) -> Result<JsonValue> {
    GRAMMAR.with(|grammar| parse_from(&grammar.then(end_of_input()), input))
}

impl FromStr for JsonValue {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        parse_json(s)
    }
}
