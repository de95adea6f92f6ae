// Pattern 9: Composition
// The car owns its engine: the engine is created inside `Car::new` and is
// dropped together with the car.

use crate::Transcript;
use std::cell::RefCell;
use std::rc::Rc;

/// Records lifecycle events so they can be observed after the drop.
pub type EventLog = Rc<RefCell<Transcript>>;

pub struct Engine {
    log: EventLog,
}

impl Engine {
    fn new(log: EventLog) -> Self {
        log.borrow_mut().push("Engine created".to_string());
        Self { log }
    }

    fn start(&self) {
        self.log.borrow_mut().push("Engine started".to_string());
    }
}

impl Drop for Engine {
    fn drop(&mut self) {
        self.log.borrow_mut().push("Engine dropped".to_string());
    }
}

pub struct Car {
    engine: Engine, // owned, never handed out
    log: EventLog,
}

impl Car {
    pub fn new(log: &EventLog) -> Self {
        Self {
            engine: Engine::new(Rc::clone(log)),
            log: Rc::clone(log),
        }
    }

    pub fn start(&self) {
        self.engine.start();
        self.log.borrow_mut().push("Car is ready".to_string());
    }
}

pub fn demo() -> Transcript {
    let log: EventLog = Rc::new(RefCell::new(Transcript::new()));
    {
        let car = Car::new(&log);
        car.start();
    }
    log.take()
}
