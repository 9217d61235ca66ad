//! Flat-file row codec.
//!
//! One contact per row, the eight fields in [`ContactField::ALL`] order,
//! separated by `,`. Within a field `\`, `,`, LF and CR are backslash-escaped
//! so a row never spans lines and always splits back into eight fields.

use crate::{
  Error, Result,
  contact::{Contact, ContactField},
};

const DELIMITER: char = ',';

// ─── Escaping ────────────────────────────────────────────────────────────────

fn escape_field(s: &str) -> String {
  s.replace('\\', "\\\\")
   .replace(',', "\\,")
   .replace('\n', "\\n")
   .replace('\r', "\\r")
}

/// Split a row on unescaped delimiters, unescaping each field.
fn split_fields(row: &str) -> Result<Vec<String>> {
  let mut fields = Vec::with_capacity(ContactField::ALL.len());
  let mut current = String::new();
  let mut chars = row.chars();

  while let Some(c) = chars.next() {
    match c {
      '\\' => match chars.next() {
        Some('n') => current.push('\n'),
        Some('r') => current.push('\r'),
        Some('\\') => current.push('\\'),
        Some(',') => current.push(','),
        Some(other) => {
          current.push('\\');
          current.push(other);
        }
        None => {
          return Err(Error::MalformedRow(format!(
            "dangling escape at end of row {row:?}"
          )));
        }
      },
      DELIMITER => fields.push(std::mem::take(&mut current)),
      other => current.push(other),
    }
  }
  fields.push(current);

  Ok(fields)
}

// ─── Public API ──────────────────────────────────────────────────────────────

/// Render `contact` as a single persisted row (no trailing newline).
pub fn encode_row(contact: &Contact) -> String {
  ContactField::ALL
    .iter()
    .map(|&f| escape_field(contact.field(f)))
    .collect::<Vec<_>>()
    .join(",")
}

/// Parse one persisted row back into a [`Contact`].
pub fn decode_row(row: &str) -> Result<Contact> {
  let fields = split_fields(row)?;
  let Ok(
    [first_name, last_name, address, city, state, zip, phone_number, email],
  ) = <[String; 8]>::try_from(fields)
  else {
    return Err(Error::MalformedRow(format!(
      "expected {} fields in row {row:?}",
      ContactField::ALL.len()
    )));
  };

  Ok(Contact {
    first_name,
    last_name,
    address,
    city,
    state,
    zip,
    phone_number,
    email,
  })
}

impl Contact {
  /// See [`encode_row`].
  pub fn to_row(&self) -> String { encode_row(self) }

  /// See [`decode_row`].
  pub fn from_row(row: &str) -> Result<Self> { decode_row(row) }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn sample() -> Contact {
    Contact::new(
      "John", "Doe", "12 Main St", "Springfield", "IL", "62701", "555-1234",
      "john@example.com",
    )
  }

  /// Assert that every field survived, not just the identity key.
  fn assert_same_fields(a: &Contact, b: &Contact) {
    for field in ContactField::ALL {
      assert_eq!(a.field(field), b.field(field), "field {field:?}");
    }
  }

  #[test]
  fn plain_row_layout() {
    assert_eq!(
      encode_row(&sample()),
      "John,Doe,12 Main St,Springfield,IL,62701,555-1234,john@example.com"
    );
  }

  #[test]
  fn delimiters_and_backslashes_are_escaped() {
    let mut c = sample();
    c.address = "Apt 4, Floor 2".into();
    c.email = r"odd\name@example.com".into();

    let row = encode_row(&c);
    assert!(row.contains(r"Apt 4\, Floor 2"));
    assert!(row.contains(r"odd\\name@example.com"));

    assert_same_fields(&decode_row(&row).unwrap(), &c);
  }

  #[test]
  fn newlines_stay_on_one_line() {
    let mut c = sample();
    c.address = "line one\nline two\r".into();

    let row = encode_row(&c);
    assert!(!row.contains('\n'));
    assert!(!row.contains('\r'));
    assert_same_fields(&decode_row(&row).unwrap(), &c);
  }

  #[test]
  fn every_printable_ascii_char_survives() {
    let printable: String = (0x20u8..0x7f).map(char::from).collect();
    let c = Contact::new(
      printable.clone(),
      printable.clone(),
      printable.clone(),
      printable.clone(),
      printable.clone(),
      printable.clone(),
      printable.clone(),
      printable,
    );
    assert_same_fields(&decode_row(&encode_row(&c)).unwrap(), &c);
  }

  #[test]
  fn empty_fields_survive() {
    let c = Contact::default();
    assert_eq!(encode_row(&c), ",,,,,,,");
    assert_same_fields(&decode_row(",,,,,,,").unwrap(), &c);
  }

  #[test]
  fn wrong_field_count_is_rejected() {
    assert!(matches!(decode_row("a,b,c"), Err(Error::MalformedRow(_))));
    assert!(matches!(
      decode_row("a,b,c,d,e,f,g,h,i"),
      Err(Error::MalformedRow(_))
    ));
  }

  #[test]
  fn dangling_escape_is_rejected() {
    assert!(matches!(
      decode_row(r"a,b,c,d,e,f,g,h\"),
      Err(Error::MalformedRow(_))
    ));
  }

  #[test]
  fn unknown_escape_is_kept_literally() {
    let c = decode_row(r"a\q,b,c,d,e,f,g,h").unwrap();
    assert_eq!(c.first_name, r"a\q");
  }
}
