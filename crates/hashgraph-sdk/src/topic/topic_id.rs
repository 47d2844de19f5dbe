use crate::entity_id::entity_id;

entity_id! {
    /// The id of a consensus topic.
    TopicId, TopicId, topic_num
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_round_trip() {
        let id: TopicId = "0.0.4567".parse().unwrap();
        assert_eq!(TopicId::from_bytes(&id.to_bytes()).unwrap(), id);
        assert_eq!(id.to_string(), "0.0.4567");
    }
}
