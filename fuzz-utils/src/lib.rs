use arbitrary::{Arbitrary, Unstructured};
use hyperion::mock::Mock;
use hyperion::SeqTree;
use std::fmt::{self, Debug, Display, Formatter};
use std::panic::{self, AssertUnwindSafe, UnwindSafe};

fn expect_might_panic<R, F: UnwindSafe + FnOnce() -> R>(f: F) -> Result<R, ()> {
    // set a custom hook that does nothing, so we don't print panic information every time the mock
    // implementation panics
    panic::set_hook(Box::new(|_| {}));

    let result = panic::catch_unwind(f).map_err(|_| ());

    // remove our custom hook
    let _ = panic::take_hook();

    result
}

const VARIANTS: u8 = 14;

/// A single operation on one of the trees, along with its expected outcome
///
/// Expected outcomes are recorded by running the same operation on a [`Mock`] while the command is
/// generated.
#[derive(Clone)]
pub enum Command<T> {
    InsertAt {
        id: TreeId,
        index: usize,
        value: T,
        panics: bool,
    },
    DeleteAt {
        id: TreeId,
        index: usize,
        removed: Option<T>,
    },
    Get {
        id: TreeId,
        index: usize,
        value: Option<T>,
    },
    Set {
        id: TreeId,
        index: usize,
        value: T,
        old: Option<T>,
    },
    Search {
        id: TreeId,
        index: usize,
        found: Option<T>,
    },
    PushFront {
        id: TreeId,
        value: T,
    },
    PushBack {
        id: TreeId,
        value: T,
    },
    PopFront {
        id: TreeId,
        value: Option<T>,
    },
    PopBack {
        id: TreeId,
        value: Option<T>,
    },
    Roll {
        id: TreeId,
        depth: usize,
        count: isize,
    },
    SplitOff {
        id: TreeId,
        at: usize,
        // if the split shouldn't panic, the id of the new tree
        new_id: Result<TreeId, ()>,
    },
    Append {
        id: TreeId,
        other: TreeId,
    },
    DropTree {
        id: TreeId,
    },
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct TreeId(usize);

impl Display for TreeId {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        Display::fmt(&self.0, f)
    }
}

/// Sequence of [`Command`]s, starting from a single empty tree
pub struct CommandSequence<T> {
    pub cmds: Vec<Command<T>>,
}

impl<T: Debug> Debug for CommandSequence<T> {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        let init_id = TreeId(0);
        f.write_str("#[test]\n")?;
        f.write_str("fn test_case() {\n")?;
        writeln!(f, "    let mut tree_{init_id}: FuzzTree = SeqTree::new();")?;
        for c in &self.cmds {
            c.fmt(f)?;
        }
        f.write_str("}")
    }
}

/// Formats an expected `Option<&T>`, as returned by `get` or `get_data`
struct OptRef<'a, T>(&'a Option<T>);

impl<T: Debug> Debug for OptRef<'_, T> {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self.0 {
            Some(v) => write!(f, "Some(&{v:?})"),
            None => f.write_str("None"),
        }
    }
}

impl<T: Debug> Debug for Command<T> {
    #[rustfmt::skip]
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self {
            Self::InsertAt { id, index, value, panics: false } => {
                writeln!(f, "    tree_{id}.insert_at({index}, {value:?});")
            }
            Self::InsertAt { id, index, value, panics: true } => {
                f.write_str("    assert!(std::panic::catch_unwind(move || {\n")?;
                writeln!(f, "        tree_{id}.insert_at({index}, {value:?})")?;
                f.write_str("    }).is_err());\n")
            }
            Self::DeleteAt { id, index, removed } => {
                writeln!(f, "    assert_eq!(tree_{id}.delete_at({index}), {removed:?});")
            }
            Self::Get { id, index, value } => {
                writeln!(f, "    assert_eq!(tree_{id}.get({index}), {:?});", OptRef(value))
            }
            Self::Set { id, index, value, old } => {
                writeln!(f, "    assert_eq!(tree_{id}.set({index}, {value:?}), {old:?});")
            }
            Self::Search { id, index, found } => {
                let ok = found.is_some();
                writeln!(f, "    assert_eq!(tree_{id}.search_at({index}), {ok});")?;
                writeln!(f, "    assert_eq!(tree_{id}.get_data(), {:?});", OptRef(found))
            }
            Self::PushFront { id, value } => writeln!(f, "    tree_{id}.push_front({value:?});"),
            Self::PushBack { id, value } => writeln!(f, "    tree_{id}.push_back({value:?});"),
            Self::PopFront { id, value } => {
                writeln!(f, "    assert_eq!(tree_{id}.pop_front(), {value:?});")
            }
            Self::PopBack { id, value } => {
                writeln!(f, "    assert_eq!(tree_{id}.pop_back(), {value:?});")
            }
            Self::Roll { id, depth, count } => {
                writeln!(f, "    tree_{id}.roll({depth}, {count});")
            }
            Self::SplitOff { id, at, new_id: Ok(new_id) } => {
                writeln!(f, "    let mut tree_{new_id} = tree_{id}.split_off({at});")
            }
            Self::SplitOff { id, at, new_id: Err(()) } => {
                f.write_str("    assert!(std::panic::catch_unwind(move || {\n")?;
                writeln!(f, "        tree_{id}.split_off({at})")?;
                f.write_str("    }).is_err());\n")
            }
            Self::Append { id, other } if id == other => {
                writeln!(f, "    tree_{id}.append(&mut tree_{id}.clone());")
            }
            Self::Append { id, other } => {
                writeln!(f, "    tree_{id}.append(&mut tree_{other});")
            }
            Self::DropTree { id } => writeln!(f, "    drop(tree_{id});"),
        }
    }
}

impl<T> CommandSequence<T> {
    pub fn map<U, F: FnMut(T) -> U>(self, mut f: F) -> CommandSequence<U> {
        CommandSequence {
            cmds: self.cmds.into_iter().map(|c| c.map_value(&mut f)).collect(),
        }
    }
}

impl<T> Command<T> {
    #[rustfmt::skip]
    pub fn map_value<U, F: FnMut(T) -> U>(self, mut f: F) -> Command<U> {
        match self {
            Self::InsertAt { id, index, value, panics } => {
                Command::InsertAt { id, index, value: f(value), panics }
            }
            Self::DeleteAt { id, index, removed } => {
                Command::DeleteAt { id, index, removed: removed.map(f) }
            }
            Self::Get { id, index, value } => Command::Get { id, index, value: value.map(f) },
            Self::Set { id, index, value, old } => {
                Command::Set { id, index, value: f(value), old: old.map(f) }
            }
            Self::Search { id, index, found } => {
                Command::Search { id, index, found: found.map(f) }
            }
            Self::PushFront { id, value } => Command::PushFront { id, value: f(value) },
            Self::PushBack { id, value } => Command::PushBack { id, value: f(value) },
            Self::PopFront { id, value } => Command::PopFront { id, value: value.map(f) },
            Self::PopBack { id, value } => Command::PopBack { id, value: value.map(f) },
            Self::Roll { id, depth, count } => Command::Roll { id, depth, count },
            Self::SplitOff { id, at, new_id } => Command::SplitOff { id, at, new_id },
            Self::Append { id, other } => Command::Append { id, other },
            Self::DropTree { id } => Command::DropTree { id },
        }
    }
}

impl<'d, T> Arbitrary<'d> for CommandSequence<T>
where
    T: Arbitrary<'d> + Clone,
{
    fn arbitrary(u: &mut Unstructured<'d>) -> arbitrary::Result<Self> {
        let mut cmds = Vec::new();
        let mut mocks = vec![Some(Mock::new())];
        let mut num_trees = 1;

        while !u.is_empty() && num_trees != 0 {
            let id = TreeId(choose_sparse_index(u, num_trees, &mocks)?);
            let variant = u.int_in_range(0..=VARIANTS - 1)?;
            cmds.push(Command::arbitrary(u, variant, id, &mut num_trees, &mut mocks)?);
        }

        Ok(CommandSequence { cmds })
    }
}

fn choose_sparse_index<T>(
    u: &mut Unstructured,
    count: usize,
    vals: &[Option<T>],
) -> arbitrary::Result<usize> {
    let mut idx = u.choose_index(count)?;
    let mut i = 0;
    while i <= idx {
        if vals[i].is_none() {
            idx += 1;
        }
        i += 1;
    }

    Ok(idx)
}

/// Picks an index that's usually in bounds for a tree of the given size, but sometimes one or
/// two past the end
fn choose_position(u: &mut Unstructured, size: usize) -> arbitrary::Result<usize> {
    u.int_in_range(0..=size + 1)
}

impl<'d, T: Arbitrary<'d> + Clone> Command<T> {
    /// Creates a new command and executes it on the provided mock trees
    fn arbitrary(
        u: &mut Unstructured<'d>,
        variant: u8,
        id: TreeId,
        count: &mut usize,
        mocks: &mut Vec<Option<Mock<T>>>,
    ) -> arbitrary::Result<Self> {
        let mock = match mocks[id.0].as_mut() {
            Some(m) => m,
            None => return Err(arbitrary::Error::IncorrectFormat),
        };
        let size = mock.size();

        let cmd = match variant {
            0 | 1 => {
                let index = choose_position(u, size)?;
                let value: T = u.arbitrary()?;
                let panics = expect_might_panic(AssertUnwindSafe(|| {
                    mock.insert_at(index, value.clone())
                }))
                .is_err();

                if panics {
                    mocks[id.0] = None;
                    *count -= 1;
                }
                Self::InsertAt { id, index, value, panics }
            }
            2 => {
                let index = choose_position(u, size)?;
                Self::DeleteAt { id, index, removed: mock.delete_at(index) }
            }
            3 => {
                let index = choose_position(u, size)?;
                Self::Get { id, index, value: mock.get(index).cloned() }
            }
            4 => {
                let index = choose_position(u, size)?;
                let value: T = u.arbitrary()?;
                let old = mock.set(index, value.clone());
                Self::Set { id, index, value, old }
            }
            5 => {
                let index = choose_position(u, size)?;
                Self::Search { id, index, found: mock.get(index).cloned() }
            }
            6 => {
                let value: T = u.arbitrary()?;
                mock.push_front(value.clone());
                Self::PushFront { id, value }
            }
            7 => {
                let value: T = u.arbitrary()?;
                mock.push_back(value.clone());
                Self::PushBack { id, value }
            }
            8 => Self::PopFront { id, value: mock.pop_front() },
            9 => Self::PopBack { id, value: mock.pop_back() },
            10 => {
                let depth = choose_position(u, size)?;
                let count = isize::from(u.arbitrary::<i16>()?);
                mock.roll(depth, count);
                Self::Roll { id, depth, count }
            }
            11 => {
                let at = choose_position(u, size)?;
                if at > size {
                    mocks[id.0] = None;
                    *count -= 1;
                    Self::SplitOff { id, at, new_id: Err(()) }
                } else {
                    let new = mock.split_off(at);
                    let new_id = TreeId(mocks.len());
                    mocks.push(Some(new));
                    *count += 1;
                    Self::SplitOff { id, at, new_id: Ok(new_id) }
                }
            }
            12 => {
                let other = TreeId(choose_sparse_index(u, *count, mocks)?);
                if other == id {
                    if let Some(m) = mocks[id.0].as_mut() {
                        let mut copy = m.clone();
                        m.append(&mut copy);
                    }
                } else {
                    let mut taken = mocks[other.0].take().unwrap_or_default();
                    if let Some(m) = mocks[id.0].as_mut() {
                        m.append(&mut taken);
                    }
                    mocks[other.0] = Some(taken);
                }
                Self::Append { id, other }
            }
            _ => {
                mocks[id.0] = None;
                *count -= 1;
                Self::DropTree { id }
            }
        };

        Ok(cmd)
    }
}

/// Tracks the trees produced by a series of [`Command`]s, checking each result against the
/// expected one
pub struct RunnerState<T, const C: usize> {
    trees: Vec<Option<SeqTree<T, C>>>,
}

impl<T, const C: usize> RunnerState<T, C>
where
    T: Debug + Clone + PartialEq,
{
    /// Creates a new, blank `RunnerState` to run a series of commands
    pub fn init() -> Self {
        RunnerState {
            trees: vec![Some(SeqTree::new())],
        }
    }

    fn tree(&mut self, id: TreeId) -> &mut SeqTree<T, C> {
        match self.trees[id.0].as_mut() {
            Some(t) => t,
            None => panic!("command refers to dropped tree {id}"),
        }
    }

    /// Runs the command
    #[rustfmt::skip]
    pub fn run_cmd(&mut self, cmd: &Command<T>) {
        match cmd {
            Command::InsertAt { id, index, value, panics: false } => {
                self.tree(*id).insert_at(*index, value.clone());
            }
            Command::InsertAt { id, index, value, panics: true } => {
                let mut tree = self.trees[id.0].take().unwrap();
                let panicked = expect_might_panic(AssertUnwindSafe(move || {
                    tree.insert_at(*index, value.clone());
                }))
                .is_err();

                assert!(panicked);
            }
            Command::DeleteAt { id, index, removed } => {
                assert_eq!(&self.tree(*id).delete_at(*index), removed);
            }
            Command::Get { id, index, value } => {
                assert_eq!(self.tree(*id).get(*index), value.as_ref());
            }
            Command::Set { id, index, value, old } => {
                assert_eq!(&self.tree(*id).set(*index, value.clone()), old);
            }
            Command::Search { id, index, found } => {
                let tree = self.tree(*id);
                assert_eq!(tree.search_at(*index), found.is_some());
                assert_eq!(tree.get_data(), found.as_ref());
            }
            Command::PushFront { id, value } => self.tree(*id).push_front(value.clone()),
            Command::PushBack { id, value } => self.tree(*id).push_back(value.clone()),
            Command::PopFront { id, value } => assert_eq!(&self.tree(*id).pop_front(), value),
            Command::PopBack { id, value } => assert_eq!(&self.tree(*id).pop_back(), value),
            Command::Roll { id, depth, count } => self.tree(*id).roll(*depth, *count),
            Command::SplitOff { id, at, new_id: Ok(new_id) } => {
                let new = self.tree(*id).split_off(*at);
                assert_eq!(new_id.0, self.trees.len());
                new.validate();
                self.trees.push(Some(new));
            }
            Command::SplitOff { id, at, new_id: Err(()) } => {
                let mut tree = self.trees[id.0].take().unwrap();
                let panicked = expect_might_panic(AssertUnwindSafe(move || {
                    let _ = tree.split_off(*at);
                }))
                .is_err();

                assert!(panicked);
            }
            Command::Append { id, other } if id == other => {
                let tree = self.tree(*id);
                let mut copy = tree.clone();
                tree.append(&mut copy);
                assert!(copy.is_empty());
            }
            Command::Append { id, other } => {
                let mut taken = self.trees[other.0].take().unwrap();
                self.tree(*id).append(&mut taken);
                assert!(taken.is_empty());
                self.trees[other.0] = Some(taken);
            }
            Command::DropTree { id } => {
                self.trees[id.0] = None;
            }
        }

        if let Some(Some(tree)) = self.trees.get(cmd_id(cmd).0) {
            tree.validate();
        }
    }
}

fn cmd_id<T>(cmd: &Command<T>) -> TreeId {
    match cmd {
        Command::InsertAt { id, .. }
        | Command::DeleteAt { id, .. }
        | Command::Get { id, .. }
        | Command::Set { id, .. }
        | Command::Search { id, .. }
        | Command::PushFront { id, .. }
        | Command::PushBack { id, .. }
        | Command::PopFront { id, .. }
        | Command::PopBack { id, .. }
        | Command::Roll { id, .. }
        | Command::SplitOff { id, .. }
        | Command::Append { id, .. }
        | Command::DropTree { id } => *id,
    }
}
