use super::{
    cursor::Cursor,
    unescape::{Escapes, read_delimited},
};
use crate::{
    error::Result,
    value::{Regex, RegexFlag, RegexFlags},
};

/// Parses `/pattern/` followed by any run of distinct flag characters.
///
/// Flag scanning stops, without failing, at the first character that is not
/// a flag or repeats one already seen; that character stays unconsumed.
pub(crate) fn parse_regex(cursor: &mut Cursor<'_>) -> Result<Regex> {
    let pattern = read_delimited(cursor, '/', Escapes::Raw)?;
    let mut flags = RegexFlags::empty();
    while let Some(flag) = cursor.peek().and_then(RegexFlag::from_char) {
        if !flags.insert(flag) {
            break;
        }
        cursor.next_char();
    }
    Ok(Regex::new(pattern, flags))
}
