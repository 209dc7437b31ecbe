// Taken from rustls <https://github.com/rustls/rustls>
//
// Copyright (c) 2016 Joe Birr-Pixton and rustls project contributors
// Copyright (c) 2020 Intel Corporation
//
// SPDX-License-Identifier: Apache-2.0 or MIT

/// A macro which defines a wire enum type.
///
/// Values that are not listed decode to `Unknown(raw)` so a peer's
/// unrecognised value can be carried around and re-encoded unchanged.
#[macro_export]
macro_rules! enum_builder {
    (
    $(#[$comment:meta])*
    @U8
        EnumName: $enum_name: ident;
        EnumVal { $( $enum_var: ident => $enum_val: expr ),* }
    ) => {
        $crate::enum_builder!(@impl $(#[$comment])* u8, get_u8, $enum_name; $( $enum_var => $enum_val ),*);
    };
    (
    $(#[$comment:meta])*
    @U16
        EnumName: $enum_name: ident;
        EnumVal { $( $enum_var: ident => $enum_val: expr ),* }
    ) => {
        $crate::enum_builder!(@impl $(#[$comment])* u16, get_u16, $enum_name; $( $enum_var => $enum_val ),*);
    };
    (
    $(#[$comment:meta])*
    @U32
        EnumName: $enum_name: ident;
        EnumVal { $( $enum_var: ident => $enum_val: expr ),* }
    ) => {
        $crate::enum_builder!(@impl $(#[$comment])* u32, get_u32, $enum_name; $( $enum_var => $enum_val ),*);
    };
    (
    @impl $(#[$comment:meta])* $repr: ty, $getter: ident, $enum_name: ident;
        $( $enum_var: ident => $enum_val: expr ),*
    ) => {
        $(#[$comment])*
        #[derive(Debug, PartialEq, Eq, Clone, Copy)]
        pub enum $enum_name {
            $( $enum_var),*
            ,Unknown($repr)
        }
        impl $enum_name {
            pub fn $getter(&self) -> $repr {
                match *self {
                    $( $enum_name::$enum_var => $enum_val),*
                    ,$enum_name::Unknown(x) => x
                }
            }
        }
        impl $crate::Codec for $enum_name {
            fn encode(&self, bytes: &mut $crate::Writer) -> Result<usize, $crate::EncodeErr> {
                $crate::Codec::encode(&self.$getter(), bytes)
            }

            fn read(r: &mut $crate::Reader) -> Option<Self> {
                Some(match <$repr as $crate::Codec>::read(r) {
                    None => return None,
                    $( Some($enum_val) => $enum_name::$enum_var),*
                    ,Some(x) => $enum_name::Unknown(x)
                })
            }
        }
    };
}
