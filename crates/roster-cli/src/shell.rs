//! Numbered-menu console shell over a [`Registry`].
//!
//! The shell owns no terminal state: it reads lines from any [`BufRead`] and
//! writes to any [`Write`], which keeps it scriptable and testable. End of
//! input behaves like choosing "exit" at every level.

use std::{
  collections::BTreeMap,
  io::{BufRead, Write},
};

use anyhow::Result;
use roster_core::{BookStore, Contact, ContactField, ContactUpdate, Registry};

const RULE: &str = "-------------------------";

const MAIN_MENU: &[&str] = &[
  "1. Add a new address book",
  "2. View all address books",
  "3. Work with an address book",
  "4. Search persons in a city",
  "5. Search persons in a state",
  "6. View persons by city (last search)",
  "7. View persons by state (last search)",
  "8. Count address books by city",
  "9. Count address books by state",
  "10. Save an address book to file",
  "11. Load an address book from file",
  "0. Exit",
];

const BOOK_MENU: &[&str] = &[
  "1. Add new contacts",
  "2. View all contacts",
  "3. Edit an existing contact",
  "4. Delete a contact",
  "5. Sort contacts by name",
  "6. Show contacts sorted by city",
  "7. Show contacts sorted by state",
  "8. Show contacts sorted by ZIP code",
  "9. Search persons in a city",
  "10. Search persons in a state",
  "11. Count contacts by city",
  "12. Count contacts by state",
  "0. Back to main menu",
];

/// Whether the caller should keep looping or unwind to exit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
  Continue,
  Exit,
}

// ─── Shell ────────────────────────────────────────────────────────────────────

pub struct Shell<R, W, S> {
  input:    R,
  out:      W,
  store:    S,
  registry: Registry,
}

impl<R, W, S> Shell<R, W, S>
where
  R: BufRead,
  W: Write,
  S: BookStore,
{
  pub fn new(input: R, out: W, store: S) -> Self {
    Self { input, out, store, registry: Registry::new() }
  }

  #[cfg(test)]
  pub fn registry(&self) -> &Registry { &self.registry }

  /// Run the main menu until the user exits or input ends.
  pub fn run(&mut self) -> Result<()> {
    loop {
      print_menu(&mut self.out, MAIN_MENU)?;
      let Some(choice) = self.ask("Enter your choice")? else {
        break;
      };
      if self.main_choice(&choice)? == Flow::Exit {
        break;
      }
    }
    writeln!(self.out, "Goodbye.")?;
    Ok(())
  }

  // ── Input ─────────────────────────────────────────────────────────────────

  /// Print `label`, then read one line without its terminator. `None` at
  /// end of input. Surrounding spaces are kept, as field values are stored
  /// exactly as typed.
  fn ask_value(&mut self, label: &str) -> Result<Option<String>> {
    write!(self.out, "{label}: ")?;
    self.out.flush()?;

    let mut line = String::new();
    if self.input.read_line(&mut line)? == 0 {
      writeln!(self.out)?;
      return Ok(None);
    }
    Ok(Some(line.trim_end_matches(['\r', '\n']).to_owned()))
  }

  /// Like [`ask_value`](Self::ask_value), trimmed. For menu choices, counts
  /// and book names.
  fn ask(&mut self, label: &str) -> Result<Option<String>> {
    Ok(self.ask_value(label)?.map(|line| line.trim().to_owned()))
  }

  /// Ask for each label in turn; `None` if input ends part-way.
  fn ask_all<const N: usize>(
    &mut self,
    labels: [&str; N],
  ) -> Result<Option<[String; N]>> {
    let mut answers: [String; N] = std::array::from_fn(|_| String::new());
    for (answer, label) in answers.iter_mut().zip(labels) {
      let Some(value) = self.ask_value(label)? else {
        return Ok(None);
      };
      *answer = value;
    }
    Ok(Some(answers))
  }

  fn ask_contact(&mut self) -> Result<Option<Contact>> {
    let labels = ContactField::ALL.map(ContactField::label);
    let Some(
      [first_name, last_name, address, city, state, zip, phone_number, email],
    ) = self.ask_all(labels)?
    else {
      return Ok(None);
    };
    Ok(Some(Contact {
      first_name,
      last_name,
      address,
      city,
      state,
      zip,
      phone_number,
      email,
    }))
  }

  fn ask_update(&mut self) -> Result<Option<ContactUpdate>> {
    let labels = [
      ContactField::Address,
      ContactField::City,
      ContactField::State,
      ContactField::Zip,
      ContactField::PhoneNumber,
      ContactField::Email,
    ]
    .map(ContactField::label);
    let Some([address, city, state, zip, phone_number, email]) =
      self.ask_all(labels)?
    else {
      return Ok(None);
    };
    Ok(Some(ContactUpdate { address, city, state, zip, phone_number, email }))
  }

  // ── Main menu ─────────────────────────────────────────────────────────────

  fn main_choice(&mut self, choice: &str) -> Result<Flow> {
    match choice {
      "1" => {
        let Some(name) = self.ask("Name of the new address book")? else {
          return Ok(Flow::Exit);
        };
        match self.registry.create_book(&name) {
          Ok(_) => writeln!(self.out, "Address book '{name}' added.")?,
          Err(e) => writeln!(self.out, "{e}")?,
        }
      }
      "2" => {
        let mut names: Vec<&str> = self.registry.names().collect();
        names.sort_unstable();
        writeln!(self.out, "Address books:")?;
        for name in names {
          writeln!(self.out, "{name}")?;
        }
        writeln!(self.out, "{RULE}")?;
      }
      "3" => {
        let Some(name) = self.ask("Address book to work with")? else {
          return Ok(Flow::Exit);
        };
        if self.registry.contains(&name) {
          return self.book_menu(&name);
        }
        writeln!(self.out, "Address book not found.")?;
      }
      "4" => {
        let Some(city) = self.ask_value("City to search for")? else {
          return Ok(Flow::Exit);
        };
        let hits = self.registry.search_city(&city);
        write_contacts(&mut self.out, "Search results", hits)?;
      }
      "5" => {
        let Some(state) = self.ask_value("State to search for")? else {
          return Ok(Flow::Exit);
        };
        let hits = self.registry.search_state(&state);
        write_contacts(&mut self.out, "Search results", hits)?;
      }
      "6" => {
        let Some(city) = self.ask_value("City to view")? else {
          return Ok(Flow::Exit);
        };
        let hits = self.registry.view_by_city(&city);
        write_contacts(&mut self.out, "Persons by city", hits)?;
      }
      "7" => {
        let Some(state) = self.ask_value("State to view")? else {
          return Ok(Flow::Exit);
        };
        let hits = self.registry.view_by_state(&state);
        write_contacts(&mut self.out, "Persons by state", hits)?;
      }
      "8" => {
        let counts = self.registry.count_by_city();
        write_counts(&mut self.out, "City", &counts)?;
      }
      "9" => {
        let counts = self.registry.count_by_state();
        write_counts(&mut self.out, "State", &counts)?;
      }
      "10" => {
        let Some(name) = self.ask("Address book to save")? else {
          return Ok(Flow::Exit);
        };
        match self.registry.save_book(&self.store, &name) {
          Ok(()) => writeln!(self.out, "Contacts saved successfully to file.")?,
          Err(e) => writeln!(self.out, "Failed to save contacts: {e}")?,
        }
      }
      "11" => {
        let Some(name) = self.ask("Address book to load")? else {
          return Ok(Flow::Exit);
        };
        match self.registry.load_book(&self.store, &name) {
          Ok(added) => writeln!(
            self.out,
            "Loaded {added} new contact(s) into '{name}'."
          )?,
          Err(e) => writeln!(self.out, "Failed to load contacts: {e}")?,
        }
      }
      "0" => return Ok(Flow::Exit),
      _ => writeln!(self.out, "Invalid choice. Please enter a valid option.")?,
    }
    Ok(Flow::Continue)
  }

  // ── Book menu ─────────────────────────────────────────────────────────────

  fn book_menu(&mut self, name: &str) -> Result<Flow> {
    loop {
      writeln!(self.out, "Address book '{name}':")?;
      print_menu(&mut self.out, BOOK_MENU)?;
      let Some(choice) = self.ask("Enter your choice")? else {
        return Ok(Flow::Exit);
      };
      if choice == "0" {
        return Ok(Flow::Continue);
      }
      if self.book_choice(name, &choice)? == Flow::Exit {
        return Ok(Flow::Exit);
      }
    }
  }

  fn book_choice(&mut self, name: &str, choice: &str) -> Result<Flow> {
    match choice {
      "1" => {
        let Some(count) = self.ask("Number of persons to add")? else {
          return Ok(Flow::Exit);
        };
        let Ok(count) = count.parse::<usize>() else {
          writeln!(self.out, "Please enter a whole number.")?;
          return Ok(Flow::Continue);
        };
        for i in 1..=count {
          writeln!(self.out, "Contact information for person {i}:")?;
          let Some(contact) = self.ask_contact()? else {
            return Ok(Flow::Exit);
          };
          match self.registry.book_mut(name)?.add(contact) {
            Ok(()) => writeln!(self.out, "Contact added to the address book.")?,
            Err(e) => writeln!(self.out, "{e}")?,
          }
        }
      }
      "2" => {
        let book = self.registry.book(name)?;
        write_contacts(&mut self.out, "Address book contacts", book)?;
      }
      "3" => {
        let Some([first, last]) = self.ask_all(["First name", "Last name"])?
        else {
          return Ok(Flow::Exit);
        };
        if self.registry.book(name)?.find(&first, &last).is_none() {
          writeln!(self.out, "Contact not found. Unable to edit.")?;
          return Ok(Flow::Continue);
        }
        writeln!(self.out, "Enter new information for the contact:")?;
        let Some(update) = self.ask_update()? else {
          return Ok(Flow::Exit);
        };
        match self.registry.book_mut(name)?.edit(&first, &last, update) {
          Ok(_) => writeln!(self.out, "Contact updated successfully.")?,
          Err(e) => writeln!(self.out, "{e}")?,
        }
      }
      "4" => {
        let Some([first, last]) = self.ask_all(["First name", "Last name"])?
        else {
          return Ok(Flow::Exit);
        };
        match self.registry.book_mut(name)?.delete(&first, &last) {
          Ok(_) => writeln!(self.out, "Contact deleted successfully.")?,
          Err(e) => writeln!(self.out, "{e}")?,
        }
      }
      "5" => {
        let book = self.registry.book_mut(name)?;
        book.sort_by_name();
        write_contacts(&mut self.out, "Contacts sorted by name", &*book)?;
      }
      "6" | "7" | "8" => {
        let (field, title) = match choice {
          "6" => (ContactField::City, "Contacts sorted by city"),
          "7" => (ContactField::State, "Contacts sorted by state"),
          _ => (ContactField::Zip, "Contacts sorted by ZIP code"),
        };
        let sorted = self.registry.book(name)?.sorted_by(field);
        write_contacts(&mut self.out, title, sorted)?;
      }
      "9" | "10" => {
        let (field, label) = if choice == "9" {
          (ContactField::City, "City to search for")
        } else {
          (ContactField::State, "State to search for")
        };
        let Some(value) = self.ask_value(label)? else {
          return Ok(Flow::Exit);
        };
        let hits = self.registry.book(name)?.search_by(field, &value);
        write_contacts(&mut self.out, "Search results", hits)?;
      }
      "11" => {
        let counts = self.registry.book(name)?.count_by_city();
        write_counts(&mut self.out, "City", &counts)?;
      }
      "12" => {
        let counts = self.registry.book(name)?.count_by_state();
        write_counts(&mut self.out, "State", &counts)?;
      }
      _ => writeln!(self.out, "Invalid choice. Please enter a valid option.")?,
    }
    Ok(Flow::Continue)
  }
}

// ─── Rendering ────────────────────────────────────────────────────────────────

fn print_menu(out: &mut impl Write, entries: &[&str]) -> Result<()> {
  for entry in entries {
    writeln!(out, "{entry}")?;
  }
  Ok(())
}

/// Write a titled list of contact records, or a "no match" line.
pub fn write_contacts<'a>(
  out: &mut impl Write,
  title: &str,
  contacts: impl IntoIterator<Item = &'a Contact>,
) -> Result<()> {
  writeln!(out, "{title}:")?;
  let mut any = false;
  for contact in contacts {
    any = true;
    write!(out, "{contact}")?;
    writeln!(out, "{RULE}")?;
  }
  if !any {
    writeln!(out, "No matching persons found.")?;
  }
  Ok(())
}

fn write_counts(
  out: &mut impl Write,
  entity: &str,
  counts: &BTreeMap<String, usize>,
) -> Result<()> {
  writeln!(out, "Count results by {entity}:")?;
  for (key, count) in counts {
    writeln!(out, "{key}: {count}")?;
  }
  writeln!(out, "{RULE}")?;
  Ok(())
}
