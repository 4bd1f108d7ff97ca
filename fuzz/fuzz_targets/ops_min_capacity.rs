#![no_main]
use arbitrary::{Arbitrary, Unstructured};
use hyperion_fuzz_utils::{CommandSequence, RunnerState};
use libfuzzer_sys::fuzz_target;
use std::fmt::{self, Debug, Formatter};

#[derive(Clone)]
struct UpperLetter(char);

impl Debug for UpperLetter {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        Debug::fmt(&self.0, f)
    }
}

impl<'d> Arbitrary<'d> for UpperLetter {
    fn arbitrary(u: &mut Unstructured<'d>) -> arbitrary::Result<Self> {
        Ok(UpperLetter((b'A' + u.int_in_range(0_u8..=25)?) as char))
    }
}

fuzz_target!(|cmds: CommandSequence<UpperLetter>| {
    let cmds = cmds.map(|c| c.0);

    let mut runner: RunnerState<char, 2> = RunnerState::init();

    for c in &cmds.cmds {
        runner.run_cmd(c);
    }
});
