use super::{WorkCategory, WorkRecord};

pub static WORKS: &[WorkRecord] = &[
	WorkRecord {
		id: 1,
		category: WorkCategory::Lyric,
		title: "水调歌头·明月几时有",
		content: "丙辰中秋，欢饮达旦，大醉，作此篇，兼怀子由。
明月几时有？把酒问青天。
不知天上宫阙，今夕是何年。
我欲乘风归去，又恐琼楼玉宇，高处不胜寒。
起舞弄清影，何似在人间。

转朱阁，低绮户，照无眠。
不应有恨，何事长向别时圆？
人有悲欢离合，月有阴晴圆缺，此事古难全。
但愿人长久，千里共婵娟。",
		description: "这首词作于苏轼47岁时的中秋之夜，是一首著名的抒情词。词中表达了对弟弟苏辙的思念之情，以及对人生聚散无常的感慨。",
	},
	WorkRecord {
		id: 2,
		category: WorkCategory::Poem,
		title: "题西林壁",
		content: "横看成岭侧成峰，
远近高低各不同。
不识庐山真面目，
只缘身在此山中。",
		description: "这首诗写于苏轼游览庐山西林寺时，描述了庐山变幻莫测的景色，蕴含着深刻的哲理。",
	},
	WorkRecord {
		id: 3,
		category: WorkCategory::Lyric,
		title: "江城子·密州出猎",
		content: "老夫聊发少年狂，左牵黄，右擎苍，锦帽貂裘，千骑卷平冈。
为报倾城随太守，亲射虎，看孙郎。
酒酣胸胆尚开张，鬓微霜，又何妨？
持节云中，何日遣冯唐？
会挽雕弓如满月，西北望，射天狼。",
		description: "这首词写于苏轼任密州知州时出猎的情景，展现了作者豪迈奔放的个性和远大的抱负。",
	},
	WorkRecord {
		id: 4,
		category: WorkCategory::Prose,
		title: "前赤壁赋",
		content: "壬戌之秋，七月既望，苏子与客泛舟游于赤壁之下。清风徐来，水波不兴。举酒属客，诵明月之诗，歌窈窕之章。少焉，月出于东山之上，徘徊于斗牛之间。白露横江，水光接天。纵一苇之所如，凌万顷之茫然...",
		description: "这是一篇描写赤壁游览的散文，以优美的文字描绘了月夜泛舟的景色，抒发了对人生短暂的感慨。",
	},
];
