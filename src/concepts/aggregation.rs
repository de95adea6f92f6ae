// Pattern 8: Aggregation
// The university has departments, but they exist on their own and
// outlive it.

use crate::Transcript;
use std::rc::Rc;

#[derive(Debug, PartialEq)]
pub struct Department {
    pub name: String,
}

#[derive(Debug)]
pub struct University {
    pub name: String,
    departments: Vec<Rc<Department>>,
}

impl University {
    pub fn new(name: impl Into<String>, departments: Vec<Rc<Department>>) -> Self {
        Self {
            name: name.into(),
            departments,
        }
    }

    pub fn department_names(&self) -> Vec<&str> {
        self.departments.iter().map(|d| d.name.as_str()).collect()
    }
}

pub fn demo() -> Transcript {
    let cs_dept = Rc::new(Department {
        name: "Computer Science".to_string(),
    });

    let mut lines = Transcript::new();
    {
        let uni = University::new("MIT", vec![Rc::clone(&cs_dept)]);
        lines.push(format!("{} has {:?}", uni.name, uni.department_names()));
    }
    lines.push(format!("{} still exists after the university", cs_dept.name));
    lines
}
