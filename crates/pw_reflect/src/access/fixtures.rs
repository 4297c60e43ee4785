//! Object graphs shared by the access tests.

use alloc::boxed::Box;
use alloc::string::String;
use alloc::vec;
use alloc::vec::Vec;

use crate::derive::Reflect;

#[derive(Reflect)]
pub(crate) struct A {
    pub number: i32,
    #[reflect(rename = "instanceB")]
    pub instance_b: Option<Box<B>>,
    pub b: B,
    #[reflect(readonly)]
    pub id: u32,
    #[reflect(writeonly)]
    pub secret: String,
    #[reflect(skip)]
    pub cache: u64,
}

#[derive(Reflect)]
pub(crate) struct B {
    pub text: String,
    #[reflect(rename = "instanceA")]
    pub instance_a: Option<Box<A>>,
}

#[derive(Reflect)]
pub(crate) struct C {
    #[reflect(rename = "arrayOfA")]
    pub array_of_a: Vec<A>,
    pub numbers: Vec<i32>,
    pub grid: [[u8; 2]; 2],
}

impl A {
    pub(crate) fn new(number: i32, text: &str) -> Self {
        Self {
            number,
            instance_b: None,
            b: B::new(text),
            id: 7,
            secret: String::from("hidden"),
            cache: 0,
        }
    }
}

impl B {
    pub(crate) fn new(text: &str) -> Self {
        Self {
            text: String::from(text),
            instance_a: None,
        }
    }
}

impl C {
    pub(crate) fn new() -> Self {
        Self {
            array_of_a: vec![A::new(1, "first"), A::new(2, "second")],
            numbers: vec![0],
            grid: [[1, 2], [3, 4]],
        }
    }
}
