//
// Copyright (c) batteryd contributors
// See License.txt for details
/// Strip C-style `/* ... */` comments so config files can be annotated.
///
/// An unterminated comment is kept as-is instead of eating the rest of the
/// document.
pub fn remove_comments(config_string: &str) -> String {
    let mut data = String::from(config_string);
    while let Some(start) = data.find("/*") {
        match data[start + 2..].find("*/") {
            Some(len) => data.replace_range(start..start + 2 + len + 2, ""),
            None => break,
        }
    }
    data
}
