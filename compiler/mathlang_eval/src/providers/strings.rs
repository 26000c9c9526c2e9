//! String manipulation. Indices and lengths count characters, not bytes.

use mathlang_runtime::{
    argument_error, Environment, EvalResult, Executor, Operation, Provider, Value,
};

use super::{count, integer, string, Collection};

pub struct StringsProvider;

impl Provider for StringsProvider {
    fn name(&self) -> &'static str {
        "Strings"
    }

    fn operations(&self) -> Vec<Operation> {
        vec![
            Operation::new("Concat", "Concatenate", "Strings/Create", concat)
                .with_description("Concatenates strings together")
                .variadic("strings", "Strings to concatenate"),
            Operation::new("Substring", "Substring", "Strings/Extract", substring)
                .with_description("Extracts a portion of a string")
                .required("string", "The source string")
                .required("start", "Start index (0-based)")
                .optional_absent("length", "Number of characters (defaults to rest of string)"),
            Operation::new("ToUpper", "To Uppercase", "Strings/Transform", to_upper)
                .with_description("Converts a string to uppercase")
                .required("string", "The string to convert"),
            Operation::new("ToLower", "To Lowercase", "Strings/Transform", to_lower)
                .with_description("Converts a string to lowercase")
                .required("string", "The string to convert"),
            Operation::new("Trim", "Trim", "Strings/Transform", trim)
                .with_description("Removes leading and trailing whitespace")
                .required("string", "The string to trim"),
            Operation::new("Split", "Split", "Strings/Transform", split)
                .with_description("Splits a string by a delimiter into a list")
                .required("string", "The string to split")
                .required("delimiter", "The delimiter to split by"),
            Operation::new("Join", "Join", "Strings/Transform", join)
                .with_description("Joins a list of strings with a delimiter")
                .required("list", "List of strings to join")
                .required("delimiter", "Delimiter to insert between elements"),
            Operation::new("Replace", "Replace", "Strings/Transform", replace)
                .with_description("Replaces occurrences of a substring")
                .required("string", "The source string")
                .required("find", "Substring to find")
                .required("replace_with", "Replacement string"),
            Operation::new("Contains", "Contains", "Strings/Search", contains)
                .with_description("Checks if a string contains a substring")
                .required("string", "The string to search in")
                .required("substring", "The substring to find"),
            Operation::new("StartsWith", "Starts With", "Strings/Search", starts_with)
                .with_description("Checks if a string starts with a prefix")
                .required("string", "The string to check")
                .required("prefix", "The prefix to look for"),
            Operation::new("EndsWith", "Ends With", "Strings/Search", ends_with)
                .with_description("Checks if a string ends with a suffix")
                .required("string", "The string to check")
                .required("suffix", "The suffix to look for"),
            Operation::new("IndexOf", "Index Of", "Strings/Search", index_of)
                .with_description(
                    "Returns the index of the first occurrence of a substring, or -1 if not found",
                )
                .required("string", "The string to search in")
                .required("substring", "The substring to find"),
            Operation::new("CharAt", "Character At", "Strings/Extract", char_at)
                .with_description("Returns the character at a given index")
                .required("string", "The source string")
                .required("index", "The index (0-based)"),
            Operation::new("Reverse", "Reverse String", "Strings/Transform", reverse)
                .with_description("Reverses a string")
                .required("string", "The string to reverse"),
            Operation::new("Repeat", "Repeat", "Strings/Create", repeat)
                .with_description("Repeats a string n times")
                .required("string", "The string to repeat")
                .required("count", "Number of times to repeat"),
        ]
    }
}

/// Search results are reported as 1/0 integers.
fn flag(b: bool) -> Value {
    Value::int(i64::from(b))
}

fn concat(args: &[Value], _env: &Environment, _executor: &mut dyn Executor) -> EvalResult {
    let joined: String = args.iter().map(Value::display).collect();
    Ok(Value::string(joined))
}

fn substring(args: &[Value], _env: &Environment, _executor: &mut dyn Executor) -> EvalResult {
    let s = string("Substring", &args[0])?;
    let start = integer("Substring", &args[1])?;
    let len = s.chars().count();
    let Ok(start) = usize::try_from(start) else {
        return Err(argument_error(format!("Start index cannot be negative: {start}")));
    };
    if start > len {
        return Err(argument_error(format!(
            "Start index {start} exceeds string length {len}"
        )));
    }
    let take = match args.get(2) {
        Some(length) => {
            let length = integer("Substring", length)?;
            usize::try_from(length)
                .map_err(|_| argument_error(format!("Length cannot be negative: {length}")))?
        }
        None => len,
    };
    Ok(Value::string(s.chars().skip(start).take(take).collect::<String>()))
}

fn to_upper(args: &[Value], _env: &Environment, _executor: &mut dyn Executor) -> EvalResult {
    Ok(Value::string(string("ToUpper", &args[0])?.to_uppercase()))
}

fn to_lower(args: &[Value], _env: &Environment, _executor: &mut dyn Executor) -> EvalResult {
    Ok(Value::string(string("ToLower", &args[0])?.to_lowercase()))
}

fn trim(args: &[Value], _env: &Environment, _executor: &mut dyn Executor) -> EvalResult {
    Ok(Value::string(string("Trim", &args[0])?.trim()))
}

fn split(args: &[Value], _env: &Environment, _executor: &mut dyn Executor) -> EvalResult {
    let s = string("Split", &args[0])?;
    let delimiter = string("Split", &args[1])?;
    if delimiter.is_empty() {
        return Err(argument_error("Split delimiter cannot be empty"));
    }
    Ok(Value::list(s.split(delimiter).map(Value::string).collect()))
}

fn join(args: &[Value], _env: &Environment, _executor: &mut dyn Executor) -> EvalResult {
    let items = Collection::from_value("Join", &args[0])?;
    let delimiter = string("Join", &args[1])?;
    let parts: Vec<String> = items.iter().map(|item| item.display()).collect();
    Ok(Value::string(parts.join(delimiter)))
}

fn replace(args: &[Value], _env: &Environment, _executor: &mut dyn Executor) -> EvalResult {
    let s = string("Replace", &args[0])?;
    let find = string("Replace", &args[1])?;
    let replace_with = string("Replace", &args[2])?;
    Ok(Value::string(s.replace(find, replace_with)))
}

fn contains(args: &[Value], _env: &Environment, _executor: &mut dyn Executor) -> EvalResult {
    let s = string("Contains", &args[0])?;
    Ok(flag(s.contains(string("Contains", &args[1])?)))
}

fn starts_with(args: &[Value], _env: &Environment, _executor: &mut dyn Executor) -> EvalResult {
    let s = string("StartsWith", &args[0])?;
    Ok(flag(s.starts_with(string("StartsWith", &args[1])?)))
}

fn ends_with(args: &[Value], _env: &Environment, _executor: &mut dyn Executor) -> EvalResult {
    let s = string("EndsWith", &args[0])?;
    Ok(flag(s.ends_with(string("EndsWith", &args[1])?)))
}

fn index_of(args: &[Value], _env: &Environment, _executor: &mut dyn Executor) -> EvalResult {
    let s = string("IndexOf", &args[0])?;
    let needle = string("IndexOf", &args[1])?;
    let index = s
        .find(needle)
        .map_or(-1, |byte| s[..byte].chars().count() as i64);
    Ok(Value::int(index))
}

fn char_at(args: &[Value], _env: &Environment, _executor: &mut dyn Executor) -> EvalResult {
    let s = string("CharAt", &args[0])?;
    let index = integer("CharAt", &args[1])?;
    usize::try_from(index)
        .ok()
        .and_then(|i| s.chars().nth(i))
        .map(|c| Value::string(c.to_string()))
        .ok_or_else(|| {
            argument_error(format!(
                "Index {index} out of range for string of length {}",
                s.chars().count()
            ))
        })
}

fn reverse(args: &[Value], _env: &Environment, _executor: &mut dyn Executor) -> EvalResult {
    let s = string("Reverse", &args[0])?;
    Ok(Value::string(s.chars().rev().collect::<String>()))
}

fn repeat(args: &[Value], _env: &Environment, _executor: &mut dyn Executor) -> EvalResult {
    let s = string("Repeat", &args[0])?;
    let times = count("Repeat", &args[1])?;
    let times = usize::try_from(times)
        .map_err(|_| argument_error(format!("Count too large: {times}")))?;
    if s.len().checked_mul(times).is_none() {
        return Err(argument_error(format!("Count too large: {times}")));
    }
    Ok(Value::string(s.repeat(times)))
}
