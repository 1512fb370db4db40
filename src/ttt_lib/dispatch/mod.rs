/*!
Dispatches for external observers.

A table may be given a dispatcher, a callback to which a small message is sent on each change to the table.
This is how a front end learns of columns to offer as operands, without re-reading the table.

- [Deltas](library::delta) are sent on each change, e.g. the addition of a column.
- [Reports](library::report) are sent after a change completes, with the shape of the table.

Each column added to a table is announced with its label and position, and the sequence of these announcements is the operand feed of the table.
The feed only grows, as columns are never removed.

# Example

```rust
# use std::{cell::RefCell, rc::Rc};
# use ttt_lib::dispatch::{Dispatch, library::delta::{self, Delta}};
# use ttt_lib::table::Table;
let operands = Rc::new(RefCell::new(Vec::new()));
let feed = operands.clone();

let mut table = Table::with_dispatcher(Box::new(move |dispatch: &Dispatch| {
    if let Dispatch::Delta(Delta::Table(delta::Table::Variable { position, label })) = dispatch {
        feed.borrow_mut().push((label.clone(), *position));
    }
}));

table.add_variable();
table.add_variable();

assert_eq!(*operands.borrow(), vec![("a".to_string(), 1), ("b".to_string(), 2)]);
```
*/

pub mod library;

use library::{delta::Delta, report::Report};

/// A dispatch.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Dispatch {
    Delta(Delta),
    Report(Report),
}

/// A callback to which dispatches are sent.
pub type Dispatcher = Box<dyn Fn(&Dispatch)>;
