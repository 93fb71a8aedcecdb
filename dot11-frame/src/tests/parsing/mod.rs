macro_rules! test {
    ($($field:expr => $expected:expr),+ $(,)?) => {{
        $(
            assert_eq!($field, $expected, stringify!($field));
        )+
    }};
}

mod disassoc;
