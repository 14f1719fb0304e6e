use core::{fmt, marker::PhantomData};

use serde::{
    de::{SeqAccess, Visitor},
    Deserialize, Deserializer, Serialize, Serializer,
};

use crate::ForwardList;

impl<T> Serialize for ForwardList<T>
where
    T: Serialize,
{
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.iter())
    }
}

struct ListVisitor<T>(PhantomData<T>);

impl<'de, T> Visitor<'de> for ListVisitor<T>
where
    T: Deserialize<'de>,
{
    type Value = ForwardList<T>;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a sequence")
    }

    fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<Self::Value, A::Error> {
        let mut list = ForwardList::new();
        while let Some(value) = seq.next_element()? {
            list.push_back(value);
        }
        Ok(list)
    }
}

impl<'de, T> Deserialize<'de> for ForwardList<T>
where
    T: Deserialize<'de>,
{
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_seq(ListVisitor(PhantomData))
    }
}

#[cfg(test)]
mod test {
    use crate::ForwardList;

    #[test]
    fn serde_round_trip() {
        let mut list = ForwardList::from([1, 2]);
        list.push_front(0);

        let json = serde_json::to_string(&list).unwrap();
        assert_eq!(json, "[0,1,2]");

        let back: ForwardList<i32> = serde_json::from_str(&json).unwrap();
        back.check_debug();
        assert_eq!(back, list);
    }

    #[test]
    fn rejects_non_sequence() {
        assert!(serde_json::from_str::<ForwardList<i32>>("{\"a\":1}").is_err());
    }
}
