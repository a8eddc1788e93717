use super::RelationRecord;

pub static RELATIONS: &[RelationRecord] = &[
	RelationRecord {
		id: 1,
		name: "苏洵",
		relation_label: "父亲",
		description: "字明允，号老泉，眉山人。北宋著名文学家，与其子苏轼、苏辙并称\"三苏\"。",
		achievements: Some("以散文著称，与欧阳修、王安石等人齐名，为\"唐宋八大家\"之一。"),
		interaction: Some("教导苏轼读书写字，对其文学造诣影响深远。"),
	},
	RelationRecord {
		id: 2,
		name: "程氏",
		relation_label: "母亲",
		description: "眉山程家女，贤淑聪慧，深明大义。",
		achievements: None,
		interaction: Some(
			"程氏重视教育，常以诗书教导子女，为苏轼打下了深厚的文学基础。不幸英年早逝，对苏轼影响深远。",
		),
	},
	RelationRecord {
		id: 3,
		name: "苏辙",
		relation_label: "弟弟",
		description: "字子由，号颍滨遗老，眉山人。北宋著名文学家、政治家。",
		achievements: Some("与兄长苏轼同为\"唐宋八大家\"，文章风格沉稳平和。"),
		interaction: Some("兄弟二人感情深厚，常有诗文唱和，互相支持。"),
	},
	RelationRecord {
		id: 4,
		name: "王弗",
		relation_label: "发妻",
		description: "苏轼第一任妻子，青梅竹马，十九岁时与苏轼成婚。",
		achievements: None,
		interaction: Some(
			"婚姻生活美满，但王弗不幸早逝，苏轼曾写《江城子·乙卯正月二十日夜记梦》怀念亡妻。",
		),
	},
	RelationRecord {
		id: 5,
		name: "王闰之",
		relation_label: "继室",
		description: "苏轼第二任妻子，王弗的堂妹。",
		achievements: None,
		interaction: Some("王闰之贤惠聪慧，善解人意，与苏轼琴瑟和谐，相伴多年。"),
	},
	RelationRecord {
		id: 6,
		name: "朝云",
		relation_label: "侍妾",
		description: "原为歌妓，后随侍苏轼。",
		achievements: None,
		interaction: Some(
			"朝云聪慧多才，能诗善画，深得苏轼喜爱。苏轼贬谪黄州期间，朝云不离不弃，相伴左右。",
		),
	},
	RelationRecord {
		id: 7,
		name: "黄庭坚",
		relation_label: "挚友",
		description: "字鲁直，号山谷道人，江西修水人。北宋著名文学家。",
		achievements: Some("诗文书法皆有成就，与苏轼、秦观、晁补之并称\"宋代四大家\"。"),
		interaction: Some("与苏轼交情深厚，常有诗文唱和，互相欣赏对方的才学。"),
	},
	RelationRecord {
		id: 8,
		name: "米芾",
		relation_label: "挚友",
		description: "字元章，号海岳，书画家、文学家。",
		achievements: Some("以书法著称，与蔡襄、苏轼、黄庭坚并称\"宋四家\"。"),
		interaction: Some("与苏轼交往密切，二人都对书法和绘画有很深的造诣。"),
	},
	RelationRecord {
		id: 9,
		name: "佛印禅师",
		relation_label: "知交",
		description: "法名德诚，号佛印，江西人。北宋著名禅师。",
		achievements: None,
		interaction: Some("与苏轼有深厚的友谊，常有禅机对答，苏轼多次在诗文中提到与佛印的交往。"),
	},
	RelationRecord {
		id: 10,
		name: "文与可",
		relation_label: "挚友",
		description: "名同，字与可，眉州人。画家、文学家。",
		achievements: Some("以画竹著称，被誉为\"竹画大家\"。"),
		interaction: Some("苏轼曾作《文与可画筼筜谷偃竹记》赞誉其画竹技艺，两人常有诗文往来。"),
	},
	RelationRecord {
		id: 11,
		name: "欧阳修",
		relation_label: "座师",
		description: "字永叔，号醉翁，吉州永丰人。北宋文学家、政治家。",
		achievements: Some("\"唐宋八大家\"之一，政治上主张改革，文学上提倡\"以诗文为戏\"。"),
		interaction: Some(
			"是苏轼的座师，对其仕途和文学创作都有重要影响。欧阳修赏识苏轼的才华，多方提携。",
		),
	},
	RelationRecord {
		id: 12,
		name: "苏过",
		relation_label: "长子",
		description: "字邓州，号澹庵。",
		achievements: Some("工诗善文，有《澹庵集》传世。"),
		interaction: Some("苏轼十分疼爱这个长子，常有诗文唱和，也对其寄予厚望。"),
	},
];
