// Pattern 7: Association
// Two independent objects linked by a reference. Several books can point
// at one author; dropping a book leaves the author alone.

use crate::Transcript;
use std::rc::Rc;

#[derive(Debug)]
pub struct Author {
    pub name: String,
}

#[derive(Debug)]
pub struct Book {
    pub title: String,
    pub author: Rc<Author>,
}

impl Book {
    pub fn new(title: impl Into<String>, author: &Rc<Author>) -> Self {
        Self {
            title: title.into(),
            author: Rc::clone(author),
        }
    }

    pub fn describe(&self) -> String {
        format!("'{}' by {}", self.title, self.author.name)
    }
}

pub fn demo() -> Transcript {
    let author = Rc::new(Author {
        name: "George Orwell".to_string(),
    });
    let books = vec![
        Book::new("1984", &author),
        Book::new("Animal Farm", &author),
    ];

    let mut lines: Transcript = books.iter().map(Book::describe).collect();
    lines.push(format!("Author shared by {} owners", Rc::strong_count(&author)));
    drop(books);
    lines.push(format!("After dropping books: {}", Rc::strong_count(&author)));
    lines
}
